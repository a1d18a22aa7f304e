use std::num::NonZeroU64;

use crate::error::{internal::InternalError, AppError};

/// Parses a u64 value from String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    let result = value
        .trim()
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId { value, source: e })?;

    Ok(result)
}

/// Parses a Discord snowflake from String
///
/// Discord IDs are never zero, so `0` is rejected like any other malformed value.
///
/// # Arguments
/// - `value` - The String to attempt to parse into a snowflake
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed non-zero ID
/// - `Err(AppError::InternalErr(ParseStringId))` - Not a number, or zero
pub fn parse_snowflake_from_string(value: String) -> Result<u64, AppError> {
    let result = value
        .trim()
        .parse::<NonZeroU64>()
        .map_err(|e| InternalError::ParseStringId { value, source: e })?;

    Ok(result.get())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_snowflake() {
        let id = parse_u64_from_string("967988459656601660".to_string()).unwrap();
        assert_eq!(id, 967988459656601660);
    }

    #[test]
    fn rejects_non_numeric_value() {
        let result = parse_u64_from_string("logs".to_string());
        let Err(AppError::InternalErr(InternalError::ParseStringId { value, .. })) = result else {
            panic!("expected ParseStringId");
        };
        assert_eq!(value, "logs");
    }

    #[test]
    fn parses_non_zero_snowflake() {
        let id = parse_snowflake_from_string(" 967988459656601660 ".to_string()).unwrap();
        assert_eq!(id, 967988459656601660);
    }

    /// Tests a zero channel ID.
    ///
    /// Expected: ParseStringId instead of a value Serenity would panic on
    #[test]
    fn snowflake_rejects_zero() {
        let result = parse_snowflake_from_string("0".to_string());
        let Err(AppError::InternalErr(InternalError::ParseStringId { value, .. })) = result else {
            panic!("expected ParseStringId");
        };
        assert_eq!(value, "0");
    }
}
