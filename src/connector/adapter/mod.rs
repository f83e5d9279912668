mod stub_database;

pub use stub_database::*;
