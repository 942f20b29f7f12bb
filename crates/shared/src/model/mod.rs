pub mod cart;
pub mod course;
pub mod enrollment;
pub mod lesson;
pub mod product;
pub mod refresh_token;
pub mod role;
pub mod user;
