pub mod auth;
pub mod hashing;
pub mod jwt;
pub mod learn;
pub mod refresh_token;
pub mod shop;
pub mod token;
pub mod user;
