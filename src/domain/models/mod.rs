mod line_item;
mod processed_user;
mod query_row;
mod raw_user;
mod user;

pub use line_item::*;
pub use processed_user::*;
pub use query_row::*;
pub use raw_user::*;
pub use user::*;
