pub mod claims;
pub mod current_user;
pub mod requests;
pub mod responses;
