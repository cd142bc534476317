// ============================================================================
// Boundary Validation
// The numeral check a request handler applies before calling the converter
// ============================================================================

use crate::numeral::{ConversionError, ConversionResult};
use regex::Regex;
use std::sync::LazyLock;

/// Optional '-', one or more digits, optional '.' and more digits.
/// No '+', no exponent, no grouping separators. A single trailing newline
/// is tolerated; the parser trims it.
static NUMERAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?[0-9]+\.?[0-9]*\n?$").expect("numeral pattern is a valid regex")
});

/// Check a request's `number` value.
///
/// Returns the text unchanged when it is acceptable.
///
/// # Errors
/// - `MissingNumber` when the value is absent or empty
/// - `InvalidFormat` when it is not a plain decimal numeral
pub fn validate(number: Option<&str>) -> ConversionResult<&str> {
    let number = match number {
        Some(n) if !n.is_empty() => n,
        _ => return Err(ConversionError::MissingNumber),
    };

    if !NUMERAL_PATTERN.is_match(number) {
        return Err(ConversionError::InvalidFormat);
    }

    Ok(number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_numerals() {
        for ok in ["0", "123", "-123", "1.", "1.5", "-0.001", "99999999999999999999999"] {
            assert_eq!(validate(Some(ok)), Ok(ok));
        }
    }

    #[test]
    fn test_missing() {
        assert_eq!(validate(None), Err(ConversionError::MissingNumber));
        assert_eq!(validate(Some("")), Err(ConversionError::MissingNumber));
    }

    #[test]
    fn test_single_trailing_newline() {
        assert_eq!(validate(Some("5\n")), Ok("5\n"));
        assert_eq!(validate(Some("-1.5\n")), Ok("-1.5\n"));
        assert_eq!(validate(Some("5\n\n")), Err(ConversionError::InvalidFormat));
        assert_eq!(validate(Some("\n5")), Err(ConversionError::InvalidFormat));
    }

    #[test]
    fn test_rejects_other_formats() {
        for bad in ["abc", "+1", ".5", "1e5", "1_000", " 1", "1.2.3", "--1", "-", "１２"] {
            assert_eq!(
                validate(Some(bad)),
                Err(ConversionError::InvalidFormat),
                "{:?}",
                bad
            );
        }
    }
}
