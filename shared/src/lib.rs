//! Shared types for the storefront
//!
//! Business configuration models and the configuration error type,
//! used by the status evaluator, the link builder and the page view.

pub mod error;
pub mod models;

// Re-exports
pub use error::{ConfigError, ConfigResult};
pub use models::{
    Address, BusinessConfig, DayHours, DeliveryTerms, Menu, MenuItem, MenuSection,
    MessagingTarget, TimeOfDay, WeeklySchedule,
};
pub use serde::{Deserialize, Serialize};
