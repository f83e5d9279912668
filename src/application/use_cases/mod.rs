mod authenticate_user;
mod get_user_info;
mod list_users;
mod register_user;

pub use authenticate_user::*;
pub use get_user_info::*;
pub use list_users::*;
pub use register_user::*;
