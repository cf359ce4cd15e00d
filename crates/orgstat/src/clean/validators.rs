//! Field validators applied before a row is accepted.

/// Check that an organisation id is non-empty and purely alphanumeric.
pub fn is_valid_identifier(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_alphanumeric())
}

/// Check that a value is a pure non-negative integer literal.
///
/// No sign, no decimal point, no exponent — a fractional employee count is
/// invalid, not truncated.
pub fn is_integer_literal(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}
