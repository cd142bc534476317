// ============================================================================
// Numeral Parser
// Lexical split of decimal text into sign, integer and fraction digits
// ============================================================================

use super::errors::{ConversionError, ConversionResult};
use super::magnitude::{check_digits, Magnitude};
use std::borrow::Cow;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Separator accepted for readability in direct calls, e.g. `1_000_000`.
pub const DEFAULT_GROUPING_SEPARATOR: char = '_';

/// Sign of a numeral
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

impl Sign {
    #[inline]
    pub const fn is_negative(self) -> bool {
        matches!(self, Sign::Negative)
    }
}

/// A parsed decimal numeral.
///
/// Holds the sign, the integer part as an unbounded [`Magnitude`] and the
/// fraction digits with trailing zeros removed. `"-0012.3400"` parses to
/// sign `Negative`, integer `12`, fraction `"34"`.
///
/// With the `serde` feature a numeral (de)serializes as its canonical text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Numeral {
    sign: Sign,
    integer: Magnitude,
    fraction: String,
}

impl Numeral {
    /// Parse with the default `_` grouping separator.
    ///
    /// # Examples
    /// - `"123"` -> +123
    /// - `"-12.34"` -> -12, fraction `"34"`
    /// - `"1_000.500"` -> +1000, fraction `"5"`
    pub fn parse(raw: &str) -> ConversionResult<Self> {
        Self::parse_with_separator(raw, Some(DEFAULT_GROUPING_SEPARATOR))
    }

    /// Parse, stripping `separator` (if any) before anything else.
    ///
    /// # Errors
    /// - `EmptyInput` if nothing is left after stripping and trimming
    /// - `NoDigits` if neither side of the decimal point has digits
    /// - `InvalidCharacter` for any non-digit inside the digit runs,
    ///   including a leading `+` or a second `.`
    pub fn parse_with_separator(raw: &str, separator: Option<char>) -> ConversionResult<Self> {
        let stripped: Cow<'_, str> = match separator {
            Some(sep) if raw.contains(sep) => Cow::Owned(raw.replace(sep, "")),
            _ => Cow::Borrowed(raw),
        };

        let s = stripped.trim();
        if s.is_empty() {
            return Err(ConversionError::EmptyInput);
        }
        let lead = stripped.len() - stripped.trim_start().len();

        let (sign, body, offset) = match s.strip_prefix('-') {
            Some(rest) => (Sign::Negative, rest, 1),
            None => (Sign::Positive, s, 0),
        };

        let (int_str, frac_str) = match body.split_once('.') {
            Some((int_str, frac_str)) => (int_str, frac_str),
            None => (body, ""),
        };

        if int_str.is_empty() && frac_str.is_empty() {
            return Err(ConversionError::NoDigits);
        }

        check_digits(int_str, offset)
            .and_then(|()| check_digits(frac_str, offset + int_str.len() + 1))
            .map_err(|e| match e {
                ConversionError::InvalidCharacter {
                    character,
                    position,
                } => ConversionError::InvalidCharacter {
                    character,
                    position: raw_position(raw, separator, lead + position),
                },
                other => other,
            })?;

        Ok(Self {
            sign,
            integer: Magnitude::from_checked(int_str),
            fraction: frac_str.trim_end_matches('0').to_owned(),
        })
    }

    /// Parse the canonical text of a `rust_decimal::Decimal`.
    ///
    /// Intended for API boundaries that already hold a `Decimal`.
    pub fn from_decimal(d: rust_decimal::Decimal) -> ConversionResult<Self> {
        Self::parse_with_separator(&d.to_string(), None)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign.is_negative()
    }

    /// Integer part, always present (zero for `".5"`).
    #[inline]
    pub fn integer(&self) -> &Magnitude {
        &self.integer
    }

    /// Fraction digits with trailing zeros stripped; may be empty.
    #[inline]
    pub fn fraction_digits(&self) -> &str {
        &self.fraction
    }

    #[inline]
    pub fn has_fraction(&self) -> bool {
        !self.fraction.is_empty()
    }
}

/// Map a byte offset in the separator-free text back to `raw`.
fn raw_position(raw: &str, separator: Option<char>, position: usize) -> usize {
    let mut kept = 0;
    for (index, c) in raw.char_indices() {
        if Some(c) == separator {
            continue;
        }
        if kept == position {
            return index;
        }
        kept += c.len_utf8();
    }
    raw.len()
}

impl std::str::FromStr for Numeral {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Numeral {
    type Error = ConversionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Numeral> for String {
    fn from(numeral: Numeral) -> Self {
        numeral.to_string()
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }
        write!(f, "{}", self.integer)?;
        if self.has_fraction() {
            write!(f, ".{}", self.fraction)?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer() {
        let n = Numeral::parse("123").unwrap();
        assert_eq!(n.sign(), Sign::Positive);
        assert_eq!(n.integer().digits(), "123");
        assert!(!n.has_fraction());
    }

    #[test]
    fn test_parse_negative_fraction() {
        let n = Numeral::parse("-12.34").unwrap();
        assert!(n.is_negative());
        assert_eq!(n.integer().digits(), "12");
        assert_eq!(n.fraction_digits(), "34");
    }

    #[test]
    fn test_trailing_fraction_zeros_stripped() {
        assert_eq!(Numeral::parse("1.200").unwrap().fraction_digits(), "2");
        assert_eq!(Numeral::parse("3.000").unwrap().fraction_digits(), "");
        assert_eq!(
            Numeral::parse("1.200").unwrap(),
            Numeral::parse("1.2").unwrap()
        );
    }

    #[test]
    fn test_leading_fraction_zeros_kept() {
        assert_eq!(Numeral::parse("0.010").unwrap().fraction_digits(), "01");
    }

    #[test]
    fn test_grouping_separator_and_whitespace() {
        let n = Numeral::parse("  1_000_000  ").unwrap();
        assert_eq!(n.integer().digits(), "1000000");

        let err = Numeral::parse_with_separator("1_000", None).unwrap_err();
        assert_eq!(
            err,
            ConversionError::InvalidCharacter {
                character: '_',
                position: 1
            }
        );

        let n = Numeral::parse_with_separator("1,234.5", Some(',')).unwrap();
        assert_eq!(n.to_string(), "1234.5");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(Numeral::parse(""), Err(ConversionError::EmptyInput));
        assert_eq!(Numeral::parse("   "), Err(ConversionError::EmptyInput));
        assert_eq!(Numeral::parse("___"), Err(ConversionError::EmptyInput));
    }

    #[test]
    fn test_no_digits() {
        assert_eq!(Numeral::parse("-"), Err(ConversionError::NoDigits));
        assert_eq!(Numeral::parse("."), Err(ConversionError::NoDigits));
        assert_eq!(Numeral::parse("-."), Err(ConversionError::NoDigits));
    }

    #[test]
    fn test_bare_fraction_and_trailing_point() {
        let n = Numeral::parse(".5").unwrap();
        assert!(n.integer().is_zero());
        assert_eq!(n.fraction_digits(), "5");

        let n = Numeral::parse("7.").unwrap();
        assert_eq!(n.integer().digits(), "7");
        assert!(!n.has_fraction());
    }

    #[test]
    fn test_rejects_plus_and_exponent() {
        assert_eq!(
            Numeral::parse("+5"),
            Err(ConversionError::InvalidCharacter {
                character: '+',
                position: 0
            })
        );
        assert_eq!(
            Numeral::parse("1e5"),
            Err(ConversionError::InvalidCharacter {
                character: 'e',
                position: 1
            })
        );
        assert_eq!(
            Numeral::parse("-1.2.3"),
            Err(ConversionError::InvalidCharacter {
                character: '.',
                position: 4
            })
        );
        assert!(Numeral::parse("--1").is_err());
        assert!(Numeral::parse("abc").unwrap_err().is_malformed());
    }

    #[test]
    fn test_invalid_character_position_in_raw_input() {
        assert_eq!(
            Numeral::parse("1_000x"),
            Err(ConversionError::InvalidCharacter {
                character: 'x',
                position: 5
            })
        );
        assert_eq!(
            Numeral::parse("  12a"),
            Err(ConversionError::InvalidCharacter {
                character: 'a',
                position: 4
            })
        );
        assert_eq!(
            Numeral::parse(" -1_0.0_0_z"),
            Err(ConversionError::InvalidCharacter {
                character: 'z',
                position: 10
            })
        );
        assert_eq!(
            Numeral::parse("1_00 5"),
            Err(ConversionError::InvalidCharacter {
                character: ' ',
                position: 4
            })
        );
    }

    #[test]
    fn test_beyond_u64_is_exact() {
        let text = "123456789012345678901234567890.000000000000000000001";
        let n = Numeral::parse(text).unwrap();
        assert_eq!(n.integer().digits(), "123456789012345678901234567890");
        assert_eq!(n.fraction_digits(), "000000000000000000001");
        assert_eq!(n.to_string(), text);
    }

    #[test]
    fn test_display_is_canonical() {
        assert_eq!(Numeral::parse("-0012.3400").unwrap().to_string(), "-12.34");
        assert_eq!(Numeral::parse("-0").unwrap().to_string(), "-0");
        assert_eq!(Numeral::parse("000.000").unwrap().to_string(), "0");
    }

    #[test]
    fn test_from_str() {
        let n: Numeral = "42.50".parse().unwrap();
        assert_eq!(n.to_string(), "42.5");
        let r: Result<Numeral, _> = "not_a_number".parse();
        assert!(r.is_err());
    }

    #[test]
    fn test_from_decimal() {
        use rust_decimal::Decimal;

        let n = Numeral::from_decimal(Decimal::new(-12345, 2)).unwrap();
        assert!(n.is_negative());
        assert_eq!(n.integer().digits(), "123");
        assert_eq!(n.fraction_digits(), "45");

        let n = Numeral::from_decimal(Decimal::new(1200, 3)).unwrap();
        assert_eq!(n.to_string(), "1.2");
    }
}
