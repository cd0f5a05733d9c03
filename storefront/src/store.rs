//! Business config loading
//!
//! Parses [`BusinessConfig`] from JSON and validates every field before the
//! pure evaluators ever see it. Times, weekday keys and the messaging target
//! are checked during deserialization; text and coordinates here.

use std::path::Path;

use shared::{BusinessConfig, ConfigError, ConfigResult};

use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_PHONE_DIGITS, MAX_SHORT_TEXT_LEN,
    validate_degrees, validate_optional_text, validate_required_text,
};

/// Read, parse and validate a business config file
pub fn load_from_path(path: impl AsRef<Path>) -> ConfigResult<BusinessConfig> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::io(path.display().to_string(), e))?;
    let config = from_json_str(&text)?;

    tracing::info!(
        path = %path.display(),
        name = %config.name,
        open_days = config.schedule.iter().count(),
        menu_items = config.menu.items().count(),
        "Business config loaded"
    );
    Ok(config)
}

/// Parse and validate a business config from JSON text
pub fn from_json_str(text: &str) -> ConfigResult<BusinessConfig> {
    let config: BusinessConfig = serde_json::from_str(text).map_err(ConfigError::from_json)?;
    validate(&config)?;
    Ok(config)
}

/// Field-level checks not covered by the model types
pub fn validate(config: &BusinessConfig) -> ConfigResult<()> {
    validate_required_text(&config.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&config.tagline, "tagline", MAX_NOTE_LEN)?;

    if config.messaging_target.as_str().len() > MAX_PHONE_DIGITS {
        return Err(ConfigError::validation(format!(
            "messagingTarget has more than {MAX_PHONE_DIGITS} digits"
        )));
    }

    if config.schedule.is_always_closed() {
        tracing::warn!("Schedule has no open days, the store will always show as closed");
    }

    let addr = &config.address;
    validate_required_text(&addr.street, "address.street", MAX_ADDRESS_LEN)?;
    validate_required_text(&addr.neighborhood, "address.neighborhood", MAX_ADDRESS_LEN)?;
    validate_required_text(&addr.city, "address.city", MAX_ADDRESS_LEN)?;
    validate_required_text(&addr.state, "address.state", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&addr.zipcode, "address.zipcode", MAX_SHORT_TEXT_LEN)?;
    validate_degrees(addr.lat, "address.lat", 90.0)?;
    validate_degrees(addr.lng, "address.lng", 180.0)?;

    let terms = &config.delivery;
    validate_required_text(
        &terms.min_time_minutes_label,
        "delivery.minTimeMinutesLabel",
        MAX_SHORT_TEXT_LEN,
    )?;
    validate_required_text(
        &terms.max_time_minutes_label,
        "delivery.maxTimeMinutesLabel",
        MAX_SHORT_TEXT_LEN,
    )?;
    validate_required_text(&terms.min_order_label, "delivery.minOrderLabel", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(
        &terms.delivery_fee_label,
        "delivery.deliveryFeeLabel",
        MAX_SHORT_TEXT_LEN,
    )?;

    for section in &config.menu.sections {
        validate_required_text(&section.name, "menu section name", MAX_NAME_LEN)?;
        for item in &section.items {
            validate_required_text(&item.name, "menu item name", MAX_NAME_LEN)?;
            validate_optional_text(&item.description, "menu item description", MAX_NOTE_LEN)?;
            validate_optional_text(&item.price_label, "menu item priceLabel", MAX_SHORT_TEXT_LEN)?;
        }
    }

    Ok(())
}
