// ============================================================================
// Magnitude
// Unbounded non-negative integer held as normalised decimal digits
// ============================================================================

use super::errors::{ConversionError, ConversionResult};
use smallvec::SmallVec;
use std::fmt;

/// Inline capacity for chunk buffers; covers every value up to 10^24 - 1.
const INLINE_CHUNKS: usize = 8;

/// Chunk buffer returned by [`Magnitude::chunks`], least significant first.
pub type Chunks = SmallVec<[Chunk; INLINE_CHUNKS]>;

/// A single base-1000 group of an integer, always in `0..=999`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Chunk(u16);

impl Chunk {
    /// Largest value a chunk can hold
    pub const MAX: u16 = 999;

    /// Create a chunk, or `None` if `value` exceeds 999.
    #[inline]
    pub const fn new(value: u16) -> Option<Self> {
        if value <= Self::MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    #[inline]
    pub const fn value(self) -> u16 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Hundreds digit (0-9).
    #[inline]
    pub const fn hundreds(self) -> usize {
        (self.0 / 100) as usize
    }

    /// Value below one hundred (0-99).
    #[inline]
    pub const fn remainder(self) -> usize {
        (self.0 % 100) as usize
    }
}

/// Arbitrary-precision non-negative integer.
///
/// Stored as ASCII decimal digits with leading zeros removed, so zero is
/// the single digit `"0"`. No fixed-width or floating-point type is ever
/// involved, which keeps every digit of very long numerals exact.
///
/// # Example
/// ```
/// use say_the_number::numeral::Magnitude;
///
/// let m = Magnitude::from_digits("0001234567").unwrap();
/// assert_eq!(m.digits(), "1234567");
/// let chunks: Vec<u16> = m.chunks().iter().map(|c| c.value()).collect();
/// assert_eq!(chunks, vec![567, 234, 1]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Magnitude {
    digits: String,
}

impl Magnitude {
    /// The value zero.
    pub fn zero() -> Self {
        Self {
            digits: String::from("0"),
        }
    }

    /// Build from a run of ASCII digits.
    ///
    /// An empty run is zero. Leading zeros are dropped.
    ///
    /// # Errors
    /// Returns `InvalidCharacter` for anything that is not `'0'..='9'`.
    pub fn from_digits(digits: &str) -> ConversionResult<Self> {
        check_digits(digits, 0)?;
        Ok(Self::from_checked(digits))
    }

    /// Build from a run already known to be ASCII digits only.
    pub(crate) fn from_checked(digits: &str) -> Self {
        let significant = digits.trim_start_matches('0');
        if significant.is_empty() {
            Self::zero()
        } else {
            Self {
                digits: significant.to_owned(),
            }
        }
    }

    /// Normalised decimal digits.
    #[inline]
    pub fn digits(&self) -> &str {
        &self.digits
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits == "0"
    }

    /// Number of significant decimal digits (1 for zero).
    #[inline]
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    /// Number of base-1000 chunks needed to hold this value.
    #[inline]
    pub fn chunk_count(&self) -> usize {
        self.digits.len().div_ceil(3)
    }

    /// Decompose into base-1000 chunks, least significant first.
    ///
    /// Chunks are read straight off the digit string in triples from the
    /// right, which is the same as repeated division by 1000.
    pub fn chunks(&self) -> Chunks {
        let bytes = self.digits.as_bytes();
        let mut chunks = Chunks::with_capacity(self.chunk_count());
        let mut end = bytes.len();
        while end > 0 {
            let start = end.saturating_sub(3);
            let value = bytes[start..end]
                .iter()
                .fold(0u16, |acc, b| acc * 10 + u16::from(b - b'0'));
            chunks.push(Chunk(value));
            end = start;
        }
        chunks
    }
}

impl Default for Magnitude {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<u64> for Magnitude {
    fn from(value: u64) -> Self {
        Self {
            digits: value.to_string(),
        }
    }
}

impl From<u128> for Magnitude {
    fn from(value: u128) -> Self {
        Self {
            digits: value.to_string(),
        }
    }
}

impl std::str::FromStr for Magnitude {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_digits(s)
    }
}

impl fmt::Debug for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Magnitude({})", self.digits)
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}

/// Reject any non-digit in `run`, reporting its position shifted by `offset`.
pub(crate) fn check_digits(run: &str, offset: usize) -> ConversionResult<()> {
    match run.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
        Some((index, character)) => Err(ConversionError::InvalidCharacter {
            character,
            position: offset + index,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk_values(m: &Magnitude) -> Vec<u16> {
        m.chunks().iter().map(|c| c.value()).collect()
    }

    #[test]
    fn test_zero() {
        let z = Magnitude::zero();
        assert!(z.is_zero());
        assert_eq!(z.digits(), "0");
        assert_eq!(z.chunk_count(), 1);
        assert_eq!(chunk_values(&z), vec![0]);
        assert_eq!(Magnitude::default(), z);
    }

    #[test]
    fn test_leading_zeros_normalised() {
        assert_eq!(Magnitude::from_digits("000").unwrap(), Magnitude::zero());
        assert_eq!(Magnitude::from_digits("").unwrap(), Magnitude::zero());
        assert_eq!(Magnitude::from_digits("007").unwrap().digits(), "7");
    }

    #[test]
    fn test_chunks() {
        let m = Magnitude::from_digits("1000001").unwrap();
        assert_eq!(chunk_values(&m), vec![1, 0, 1]);
        assert_eq!(m.chunk_count(), 3);

        let m = Magnitude::from_digits("987654321123").unwrap();
        assert_eq!(chunk_values(&m), vec![123, 321, 654, 987]);
    }

    #[test]
    fn test_beyond_u128() {
        let digits = "340282366920938463463374607431768211456999";
        let m = Magnitude::from_digits(digits).unwrap();
        assert_eq!(m.to_string(), digits);
        assert_eq!(m.digit_count(), 42);
        assert_eq!(m.chunk_count(), 14);
        assert_eq!(m.chunks()[0].value(), 999);
        assert_eq!(m.chunks()[13].value(), 340);
    }

    #[test]
    fn test_invalid_character() {
        assert_eq!(
            Magnitude::from_digits("12a4"),
            Err(ConversionError::InvalidCharacter {
                character: 'a',
                position: 2
            })
        );
        assert!("1 2".parse::<Magnitude>().is_err());
    }

    #[test]
    fn test_from_integers() {
        assert_eq!(Magnitude::from(0u64), Magnitude::zero());
        assert_eq!(Magnitude::from(u64::MAX).digits(), "18446744073709551615");
        assert_eq!(
            Magnitude::from(u128::MAX).digits(),
            "340282366920938463463374607431768211455"
        );
    }

    #[test]
    fn test_chunk_parts() {
        let c = Chunk::new(987).unwrap();
        assert_eq!(c.hundreds(), 9);
        assert_eq!(c.remainder(), 87);
        assert!(Chunk::new(1000).is_none());
        assert!(Chunk::new(0).unwrap().is_zero());
    }
}
