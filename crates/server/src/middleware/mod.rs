pub mod client_ip;
pub mod jwt;
pub mod path;
pub mod validate;
