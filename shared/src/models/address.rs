//! Store Address Model

use serde::{Deserialize, Serialize};

/// Postal address of the store, with map coordinates in decimal degrees
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub neighborhood: String,
    pub city: String,
    /// State abbreviation (e.g. "SP")
    pub state: String,
    pub zipcode: String,
    pub lat: f64,
    pub lng: f64,
}
