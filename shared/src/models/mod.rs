//! Data models
//!
//! Immutable business configuration: loaded once, read thereafter.

pub mod address;
pub mod menu;
pub mod schedule;
pub mod store_info;

// Re-exports
pub use address::*;
pub use menu::*;
pub use schedule::*;
pub use store_info::*;
