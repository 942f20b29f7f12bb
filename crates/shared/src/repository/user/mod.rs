mod command;
mod query;

pub use self::command::UserCommandRepository;
pub use self::query::UserQueryRepository;

const USER_COLUMNS: &str = "user_id, email, display_name, role, password, email_verified, \
     is_active, last_login, last_login_ip, created_at, updated_at";
