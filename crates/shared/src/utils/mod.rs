mod graceful;
mod logs;
mod metrics;

pub use self::graceful::shutdown_signal;
pub use self::logs::Logger;
pub use self::metrics::{Method, Metrics, Status};
