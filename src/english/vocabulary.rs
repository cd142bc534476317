// ============================================================================
// English Vocabulary
// Immutable word tables for units, teens, tens and scales
// ============================================================================

/// Words for 0-9, indexed by digit.
pub const UNITS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Words for 10-19, indexed by `n - 10`.
pub const TEENS: [&str; 10] = [
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

/// Words for 20, 30, ..., 90, indexed by tens digit. Slots 0 and 1 are unused.
pub const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Scale words by base-1000 chunk position. Position 0 (units) has no word.
///
/// The maximum supported magnitude is `10^(3 * SCALES.len()) - 1`; appending
/// a word here raises it without any other change.
pub const SCALES: &[&str] = &[
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
];

pub const HUNDRED: &str = "hundred";
pub const POINT: &str = "point";
pub const NEGATIVE: &str = "negative";

/// Word for a single decimal digit byte (`b'0'..=b'9'`).
#[inline]
pub(crate) fn digit_word(digit: u8) -> &'static str {
    UNITS[usize::from(digit - b'0')]
}
