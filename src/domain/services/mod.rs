mod processing;

pub use processing::*;
