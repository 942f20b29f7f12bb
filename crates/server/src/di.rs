use shared::{
    abstract_trait::{
        auth::DynAuthService,
        hashing::DynHashing,
        jwt::DynJwtService,
        learn::service::{DynCourseService, DynEnrollmentService},
        shop::service::{DynCartService, DynProductService},
        token::DynTokenService,
        user::service::DynUserService,
    },
    repository::Repositories,
    service::{
        AuthService, AuthServiceDeps, CartService, CourseService, EnrollmentService,
        ProductService, TokenService, UserService,
    },
    utils::Metrics,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: DynAuthService,
    pub user_service: DynUserService,
    pub course_service: DynCourseService,
    pub enrollment_service: DynEnrollmentService,
    pub product_service: DynProductService,
    pub cart_service: DynCartService,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth_service", &"DynAuthService")
            .field("user_service", &"DynUserService")
            .field("course_service", &"DynCourseService")
            .field("enrollment_service", &"DynEnrollmentService")
            .field("product_service", &"DynProductService")
            .field("cart_service", &"DynCartService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(
        repos: Repositories,
        jwt: DynJwtService,
        hashing: DynHashing,
        metrics: Metrics,
    ) -> Self {
        let token: DynTokenService =
            Arc::new(TokenService::new(jwt, repos.refresh_command.clone()));

        let auth_service = Arc::new(AuthService::new(AuthServiceDeps {
            query: repos.user_query.clone(),
            command: repos.user_command.clone(),
            refresh_query: repos.refresh_query.clone(),
            refresh_command: repos.refresh_command.clone(),
            hashing,
            token,
            metrics: metrics.clone(),
        })) as DynAuthService;

        let user_service = Arc::new(UserService::new(
            repos.user_query.clone(),
            repos.user_command.clone(),
            metrics.clone(),
        )) as DynUserService;

        let course_service = Arc::new(CourseService::new(
            repos.course.clone(),
            repos.lesson.clone(),
            repos.enrollment.clone(),
            metrics.clone(),
        )) as DynCourseService;

        let enrollment_service = Arc::new(EnrollmentService::new(
            repos.course,
            repos.lesson,
            repos.enrollment,
            metrics.clone(),
        )) as DynEnrollmentService;

        let product_service =
            Arc::new(ProductService::new(repos.product.clone(), metrics.clone()))
                as DynProductService;

        let cart_service =
            Arc::new(CartService::new(repos.product, repos.cart, metrics)) as DynCartService;

        Self {
            auth_service,
            user_service,
            course_service,
            enrollment_service,
            product_service,
            cart_service,
        }
    }
}
