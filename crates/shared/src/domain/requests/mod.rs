mod auth;
mod course;
mod refresh_token;
mod shop;
mod user;

pub use self::auth::{LoginRequest, RefreshTokenRequest, RegisterRequest};
pub use self::course::{
    CreateCourseRequest, CreateLessonRequest, FindLessonsRequest, NewCourse, NewLesson,
    UpdateCourseRequest,
};
pub use self::refresh_token::CreateRefreshToken;
pub use self::shop::{
    AddCartItemRequest, CreateProductRequest, FindProductsRequest, RemoveCartItemRequest,
    UpdateCartItemRequest,
};
pub use self::user::{
    CreateUserRequest, RecordLoginRequest, UpdateProfileRequest, UpdateRoleRequest,
};
