//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Database access (a stub, extensible for real backends)
//! - User storage (in-memory)

pub mod adapter;
pub mod storage;

pub use adapter::*;
pub use storage::*;
