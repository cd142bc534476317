// ============================================================================
// Conversion Errors
// Error types for parsing numerals and rendering them as words
// ============================================================================

use std::fmt;

/// Errors that can occur while turning numeral text into words.
///
/// The `Display` text of every variant is meant to be shown to end users
/// verbatim, so messages are stable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConversionError {
    /// Input was empty after separator stripping and trimming
    EmptyInput,
    /// Input had a sign or decimal point but no digits on either side
    NoDigits,
    /// A character other than an ASCII digit appeared in a digit run
    InvalidCharacter {
        /// The offending character
        character: char,
        /// Byte offset in the text as the caller supplied it
        position: usize,
    },
    /// Integer part needs more base-1000 chunks than there are scale words
    MagnitudeOverflow {
        /// Exponent of the first unsupported power of ten
        max_exponent: usize,
    },
    /// Boundary received no numeral at all
    MissingNumber,
    /// Boundary received text that is not a plain decimal numeral
    InvalidFormat,
    /// Converter configuration failed validation
    InvalidConfig(String),
}

impl ConversionError {
    /// True for the variants that describe unusable numeral text.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            ConversionError::EmptyInput
                | ConversionError::NoDigits
                | ConversionError::InvalidCharacter { .. }
        )
    }

    /// True when the numeral was well-formed but too large to name.
    pub fn is_overflow(&self) -> bool {
        matches!(self, ConversionError::MagnitudeOverflow { .. })
    }
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::EmptyInput => write!(f, "Empty string input"),
            ConversionError::NoDigits => write!(f, "Numeral contains no digits"),
            ConversionError::InvalidCharacter {
                character,
                position,
            } => write!(f, "Invalid character '{}' at position {}", character, position),
            ConversionError::MagnitudeOverflow { max_exponent } => write!(
                f,
                "Number too large - maximum supported is 10^{}",
                max_exponent
            ),
            ConversionError::MissingNumber => write!(f, "Missing 'number' parameter"),
            ConversionError::InvalidFormat => write!(f, "Only numbers are allowed"),
            ConversionError::InvalidConfig(reason) => {
                write!(f, "Invalid converter configuration: {}", reason)
            },
        }
    }
}

impl std::error::Error for ConversionError {}

/// Result type alias for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;
