mod auth;
mod learn;
mod shop;
mod token;
mod user;

pub use self::auth::{AuthService, AuthServiceDeps};
pub use self::learn::{CourseService, EnrollmentService};
pub use self::shop::{CartService, ProductService};
pub use self::token::TokenService;
pub use self::user::UserService;
