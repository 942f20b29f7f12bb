mod learn;
mod refresh_token;
mod shop;
mod user;

pub use self::learn::{CourseRepository, EnrollmentRepository, LessonRepository};
pub use self::refresh_token::{RefreshTokenCommandRepository, RefreshTokenQueryRepository};
pub use self::shop::{CartRepository, ProductRepository};
pub use self::user::{UserCommandRepository, UserQueryRepository};

use crate::{
    abstract_trait::{
        learn::repository::{DynCourseRepository, DynEnrollmentRepository, DynLessonRepository},
        refresh_token::{
            command::DynRefreshTokenCommandRepository, query::DynRefreshTokenQueryRepository,
        },
        shop::repository::{DynCartRepository, DynProductRepository},
        user::repository::{command::DynUserCommandRepository, query::DynUserQueryRepository},
    },
    config::ConnectionPool,
};
use std::sync::Arc;

/// Every storage seam the services depend on.
#[derive(Clone)]
pub struct Repositories {
    pub user_query: DynUserQueryRepository,
    pub user_command: DynUserCommandRepository,
    pub refresh_query: DynRefreshTokenQueryRepository,
    pub refresh_command: DynRefreshTokenCommandRepository,
    pub course: DynCourseRepository,
    pub lesson: DynLessonRepository,
    pub enrollment: DynEnrollmentRepository,
    pub product: DynProductRepository,
    pub cart: DynCartRepository,
}

impl Repositories {
    pub fn postgres(pool: ConnectionPool) -> Self {
        Self {
            user_query: Arc::new(UserQueryRepository::new(pool.clone())),
            user_command: Arc::new(UserCommandRepository::new(pool.clone())),
            refresh_query: Arc::new(RefreshTokenQueryRepository::new(pool.clone())),
            refresh_command: Arc::new(RefreshTokenCommandRepository::new(pool.clone())),
            course: Arc::new(CourseRepository::new(pool.clone())),
            lesson: Arc::new(LessonRepository::new(pool.clone())),
            enrollment: Arc::new(EnrollmentRepository::new(pool.clone())),
            product: Arc::new(ProductRepository::new(pool.clone())),
            cart: Arc::new(CartRepository::new(pool)),
        }
    }
}

impl std::fmt::Debug for Repositories {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repositories").finish_non_exhaustive()
    }
}
