mod api;
mod auth;
mod course;
mod enrollment;
mod shop;
mod user;

pub use self::api::ApiResponse;
pub use self::auth::{LoginResponse, LogoutResponse, RefreshResponse, RegisterResponse};
pub use self::course::{
    CourseDeletedResponse, CourseDetailResponse, CourseListResponse, CourseResponse,
    LessonListResponse, LessonResponse,
};
pub use self::enrollment::{
    EnrollResponse, EnrollmentListResponse, EnrollmentResponse, LessonCompleteResponse,
    ProgressResponse,
};
pub use self::shop::{
    CartItemResponse, CartResponse, ProductListResponse, ProductResponse,
};
pub use self::user::UserResponse;
