mod database;
mod user_repository;

pub use database::*;
pub use user_repository::*;
