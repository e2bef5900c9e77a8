//! Configuration types
//!
//! Scan configuration is validated once, before the scheduler starts.
//! The user-adjustable subset can be persisted as postcard binary data.

pub mod settings;
pub mod types;

pub use settings::*;
pub use types::*;
