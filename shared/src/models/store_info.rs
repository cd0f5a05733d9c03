//! Store Info Model
//!
//! [`BusinessConfig`] is loaded once at startup and shared read-only
//! (`Arc<BusinessConfig>`) for the lifetime of the process.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Address, Menu, WeeklySchedule};
use crate::error::{ConfigError, ConfigResult};

/// Phone number used to address the messaging deep link
///
/// Always international digits-only form: no leading `+`, no separators.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MessagingTarget(String);

impl MessagingTarget {
    /// Normalize a human-entered phone number
    ///
    /// Strips `+`, spaces, `-`, `.`, `(` and `)`; anything else is rejected.
    pub fn parse(raw: &str) -> ConfigResult<Self> {
        let mut digits = String::with_capacity(raw.len());
        for c in raw.trim().chars() {
            match c {
                '0'..='9' => digits.push(c),
                '+' | ' ' | '-' | '.' | '(' | ')' => {}
                other => {
                    return Err(ConfigError::validation(format!(
                        "Invalid character '{other}' in messaging target '{raw}'"
                    )));
                }
            }
        }
        if digits.is_empty() {
            return Err(ConfigError::validation(
                "Messaging target must contain at least one digit",
            ));
        }
        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessagingTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for MessagingTarget {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<MessagingTarget> for String {
    fn from(value: MessagingTarget) -> Self {
        value.0
    }
}

/// Delivery terms, already formatted for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryTerms {
    /// e.g. "30"
    pub min_time_minutes_label: String,
    /// e.g. "50"
    pub max_time_minutes_label: String,
    /// e.g. "R$ 20,00"
    pub min_order_label: String,
    /// e.g. "Grátis"
    pub delivery_fee_label: String,
}

impl DeliveryTerms {
    /// "30-50 min"
    pub fn time_range_label(&self) -> String {
        format!(
            "{}-{} min",
            self.min_time_minutes_label, self.max_time_minutes_label
        )
    }
}

/// Business configuration entity (one per process)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessConfig {
    /// Display name shown in the page header
    pub name: String,
    #[serde(default)]
    pub tagline: Option<String>,
    pub messaging_target: MessagingTarget,
    pub schedule: WeeklySchedule,
    pub address: Address,
    pub delivery: DeliveryTerms,
    #[serde(default)]
    pub menu: Menu,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messaging_target_normalizes_separators() {
        let target = MessagingTarget::parse("+55 (11) 99999-8888").unwrap();
        assert_eq!(target.as_str(), "5511999998888");
        assert_eq!(target.to_string(), "5511999998888");
    }

    #[test]
    fn test_messaging_target_rejects_garbage() {
        assert!(MessagingTarget::parse("call me").is_err());
        assert!(MessagingTarget::parse("+ - ()").is_err());
        assert!(MessagingTarget::parse("").is_err());
    }

    #[test]
    fn test_messaging_target_deserialize() {
        let target: MessagingTarget = serde_json::from_str(r#""+55 11 91234-5678""#).unwrap();
        assert_eq!(target.as_str(), "5511912345678");
        assert!(serde_json::from_str::<MessagingTarget>(r#""abc""#).is_err());
    }

    #[test]
    fn test_delivery_time_range_label() {
        let terms = DeliveryTerms {
            min_time_minutes_label: "30".to_string(),
            max_time_minutes_label: "50".to_string(),
            min_order_label: "R$ 20,00".to_string(),
            delivery_fee_label: "Grátis".to_string(),
        };
        assert_eq!(terms.time_range_label(), "30-50 min");
    }

    #[test]
    fn test_business_config_deserialize() {
        let json = r#"{
            "name": "Burger Express",
            "messagingTarget": "5511999998888",
            "schedule": { "1": { "open": "11:00", "close": "23:30" } },
            "address": {
                "street": "Rua das Flores, 123",
                "neighborhood": "Centro",
                "city": "São Paulo",
                "state": "SP",
                "zipcode": "01000-000",
                "lat": -23.55,
                "lng": -46.63
            },
            "delivery": {
                "minTimeMinutesLabel": "30",
                "maxTimeMinutesLabel": "50",
                "minOrderLabel": "R$ 20,00",
                "deliveryFeeLabel": "Grátis"
            }
        }"#;

        let config: BusinessConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.name, "Burger Express");
        assert!(config.tagline.is_none());
        assert!(config.menu.is_empty());
        assert!(config.schedule.get(1).is_some());
        assert_eq!(config.address.city, "São Paulo");
    }
}
