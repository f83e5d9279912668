//! Storage implementations backing the user repository.

mod memory;

pub use memory::*;
