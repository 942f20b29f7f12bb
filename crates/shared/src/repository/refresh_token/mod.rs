mod command;
mod query;

pub use self::command::RefreshTokenCommandRepository;
pub use self::query::RefreshTokenQueryRepository;
