// File: api/src/services/validation.rs
//! Request parameter checks shared by the snapshot services

/// Non-empty and made only of ASCII digits.
pub(crate) fn is_non_negative_integer(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Decimal integer with an optional leading minus sign.
pub(crate) fn is_integer(value: &str) -> bool {
    is_non_negative_integer(value.strip_prefix('-').unwrap_or(value))
}

/// Query values sent empty (`?limit=`) count as not supplied.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
