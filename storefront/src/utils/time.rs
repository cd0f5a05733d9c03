//! 时间工具函数 — 业务时区
//!
//! The status evaluator is pure; these helpers resolve the business time
//! zone and "now" for the host runtime.

use chrono::DateTime;
use chrono_tz::Tz;

/// Zone used when `STORE_TIMEZONE` is unset or invalid
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::America::Sao_Paulo;

/// Parse an IANA zone name, falling back to [`DEFAULT_TIMEZONE`]
pub fn parse_timezone(name: &str) -> Tz {
    name.trim().parse::<Tz>().unwrap_or_else(|e| {
        tracing::warn!(
            "Failed to parse timezone '{}': {}, falling back to {}",
            name,
            e,
            DEFAULT_TIMEZONE
        );
        DEFAULT_TIMEZONE
    })
}

/// Current instant in the business time zone
pub fn now_in(tz: Tz) -> DateTime<Tz> {
    chrono::Utc::now().with_timezone(&tz)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timezone() {
        assert_eq!(parse_timezone("Europe/Lisbon"), chrono_tz::Europe::Lisbon);
        assert_eq!(parse_timezone(" UTC "), chrono_tz::UTC);
    }

    #[test]
    fn test_parse_timezone_fallback() {
        assert_eq!(parse_timezone("Mars/Olympus"), DEFAULT_TIMEZONE);
        assert_eq!(parse_timezone(""), DEFAULT_TIMEZONE);
    }
}
