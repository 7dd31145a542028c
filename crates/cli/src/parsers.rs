use std::{fmt::Display, str::FromStr};
use target_sum_engine::config::MAX_ENUMERATION_LEN_CEILING;

fn parse_bounded_number<T>(s: &str, min: T, max: Option<T>) -> Result<T, String>
where
    T: Copy + PartialOrd + Display + FromStr,
    <T as FromStr>::Err: Display,
{
    let value = s
        .trim()
        .replace('_', "")
        .parse::<T>()
        .map_err(|err| format!("invalid number '{s}': {err}"))?;
    if value < min {
        return Err(format!("value must be at least {min}"));
    }
    if let Some(max_bound) = max
        && value > max_bound
    {
        return Err(format!("value must be at most {max_bound}"));
    }
    Ok(value)
}

/// Parse a positive `usize` (>= 1) from CLI input.
///
/// # Errors
/// Returns an error if the input string is not a valid number or is less than 1.
pub fn parse_positive_usize(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 1, None)
}

/// Parse the enumeration limit, constrained to `[1, MAX_ENUMERATION_LEN_CEILING]`.
///
/// # Errors
/// Returns an error if the input string is not a valid number or is outside the range.
pub fn parse_max_len(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 1, Some(MAX_ENUMERATION_LEN_CEILING))
}

/// Parse a signed 64-bit integer, allowing `_` digit separators.
///
/// # Errors
/// Returns an error if the input is not an `i64`.
pub fn parse_i64(s: &str) -> Result<i64, String> {
    parse_bounded_number(s, i64::MIN, None)
}
