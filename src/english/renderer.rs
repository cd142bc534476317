// ============================================================================
// English Renderer
// Chunk, integer and full-numeral rendering as space-separated words
// ============================================================================

use super::vocabulary::{digit_word, HUNDRED, NEGATIVE, POINT, SCALES, TEENS, TENS, UNITS};
use crate::numeral::{Chunk, ConversionError, ConversionResult, Magnitude, Numeral};
use arrayvec::ArrayVec;
use smallvec::SmallVec;

/// Words of one chunk: at most "<units> hundred <tens> <units>".
type ChunkWords = ArrayVec<&'static str, 4>;

/// Exponent reported when a value needs more chunks than `scale_count` allows.
#[inline]
pub fn max_exponent(scale_count: usize) -> usize {
    3 * scale_count
}

fn chunk_words(chunk: Chunk) -> ChunkWords {
    let mut words = ChunkWords::new();
    if chunk.is_zero() {
        return words;
    }

    let hundreds = chunk.hundreds();
    if hundreds > 0 {
        words.push(UNITS[hundreds]);
        words.push(HUNDRED);
    }

    let rest = chunk.remainder();
    if rest >= 20 {
        words.push(TENS[rest / 10]);
        if rest % 10 > 0 {
            words.push(UNITS[rest % 10]);
        }
    } else if rest >= 10 {
        words.push(TEENS[rest - 10]);
    } else if rest > 0 {
        words.push(UNITS[rest]);
    }

    words
}

/// Render a 0-999 chunk. Zero renders as the empty string.
///
/// # Example
/// ```
/// use say_the_number::english::render_chunk;
/// use say_the_number::numeral::Chunk;
///
/// assert_eq!(render_chunk(Chunk::new(115).unwrap()), "one hundred fifteen");
/// assert_eq!(render_chunk(Chunk::new(0).unwrap()), "");
/// ```
pub fn render_chunk(chunk: Chunk) -> String {
    chunk_words(chunk).join(" ")
}

/// Render an integer with the default English scales.
pub fn render_integer(value: &Magnitude) -> ConversionResult<String> {
    render_integer_with_scales(value, SCALES)
}

/// Render an integer against a caller-supplied scale table.
///
/// Zero chunks are skipped along with their scale word.
///
/// # Errors
/// `MagnitudeOverflow` when `value` has more base-1000 chunks than `scales`
/// has entries.
pub fn render_integer_with_scales<S: AsRef<str>>(
    value: &Magnitude,
    scales: &[S],
) -> ConversionResult<String> {
    if value.is_zero() {
        return Ok(UNITS[0].to_owned());
    }

    let chunks = value.chunks();
    if chunks.len() > scales.len() {
        return Err(ConversionError::MagnitudeOverflow {
            max_exponent: max_exponent(scales.len()),
        });
    }

    let mut phrases: SmallVec<[String; 8]> = SmallVec::with_capacity(chunks.len());
    for (chunk, scale) in chunks.iter().zip(scales) {
        if chunk.is_zero() {
            continue;
        }
        let mut phrase = render_chunk(*chunk);
        let scale = scale.as_ref();
        if !scale.is_empty() {
            phrase.push(' ');
            phrase.push_str(scale);
        }
        phrases.push(phrase);
    }

    phrases.reverse();
    Ok(phrases.join(" "))
}

/// Render a full numeral with the default English scales.
///
/// # Example
/// ```
/// use say_the_number::english::render;
/// use say_the_number::numeral::Numeral;
///
/// let n = Numeral::parse("-12.34").unwrap();
/// assert_eq!(render(&n).unwrap(), "negative twelve point three four");
/// ```
pub fn render(numeral: &Numeral) -> ConversionResult<String> {
    render_with_scales(numeral, SCALES)
}

/// Render a full numeral against a caller-supplied scale table.
///
/// Fraction digits are read one at a time after "point" and never grouped,
/// so `0.01` is "zero point zero one". A negative sign prefixes the whole
/// phrase, including for zero.
pub fn render_with_scales<S: AsRef<str>>(
    numeral: &Numeral,
    scales: &[S],
) -> ConversionResult<String> {
    let integer = render_integer_with_scales(numeral.integer(), scales)?;

    let fraction = numeral.fraction_digits();
    let mut out = String::with_capacity(integer.len() + fraction.len() * 6 + 16);

    if numeral.is_negative() {
        out.push_str(NEGATIVE);
        out.push(' ');
    }
    out.push_str(&integer);

    if !fraction.is_empty() {
        out.push(' ');
        out.push_str(POINT);
        for digit in fraction.bytes() {
            out.push(' ');
            out.push_str(digit_word(digit));
        }
    }

    Ok(out)
}

// ============================================================================
// Tests
// ============================================================================
