//! Conversions between display values and on-chain representations.

use alloy::primitives::utils::{format_ether, parse_ether};
use alloy::primitives::U256;
use chrono::{DateTime, Local, TimeZone};

/// Parse a decimal display amount into the smallest on-chain unit (10^-18).
///
/// Negative and empty inputs are rejected; everything else is left to the
/// 18-decimal parser.
pub fn parse_amount(input: &str) -> Result<U256, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("amount is empty".to_string());
    }
    if trimmed.starts_with('-') {
        return Err(format!("amount '{}' is negative", trimmed));
    }
    parse_ether(trimmed).map_err(|e| format!("amount '{}' is not a decimal value: {}", trimmed, e))
}

/// Convert a smallest-unit integer into a display amount.
pub fn to_display_amount(value: U256) -> f64 {
    format_ether(value).parse::<f64>().unwrap_or_default()
}

/// Render an on-chain timestamp (seconds) in local time.
pub fn format_timestamp(secs: u64) -> String {
    format_timestamp_in(&Local, secs)
}

/// Render an on-chain timestamp (seconds) in the given timezone.
pub fn format_timestamp_in<Tz>(tz: &Tz, secs: u64) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    i64::try_from(secs)
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|utc| {
            utc.with_timezone(tz)
                .format("%-m/%-d/%Y, %-I:%M:%S %p")
                .to_string()
        })
        .unwrap_or_else(|| secs.to_string())
}
