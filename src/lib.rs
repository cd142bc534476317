// ============================================================================
// Say The Number Library
// Arbitrary-precision decimal numerals rendered as English words
// ============================================================================

//! # Say The Number
//!
//! Converts decimal numerals, supplied as text, into their English reading.
//!
//! ## Features
//!
//! - **Exact at any length**: digits stay as text, never as floats
//! - **Base-1000 chunking** with scale words up to quintillion
//! - **Extensible ceiling**: add a scale word to raise the maximum
//! - **Digit-by-digit fractions**: `0.01` reads "zero point zero one"
//! - **Boundary validation** matching what a request handler accepts
//!
//! ## Example
//!
//! ```rust
//! use say_the_number::prelude::*;
//!
//! assert_eq!(convert("-12.34").unwrap(), "negative twelve point three four");
//!
//! let converter = NumberConverterBuilder::new()
//!     .with_additional_scale("sextillion")
//!     .build()
//!     .unwrap();
//! assert_eq!(
//!     converter.convert("2_000_000_000_000_000_000_000").unwrap(),
//!     "two sextillion"
//! );
//!
//! let err = convert("1000000000000000000000").unwrap_err();
//! assert_eq!(err.to_string(), "Number too large - maximum supported is 10^21");
//! ```

pub mod converter;
pub mod english;
pub mod interfaces;
pub mod numeral;

pub use numeral::{ConversionError, ConversionResult};

/// Convert numeral text to English words with the default configuration.
///
/// Accepts `_` as a readability separator. Fails with a malformed-numeral
/// error for empty or non-decimal text and with `MagnitudeOverflow` beyond
/// `10^21 - 1`.
pub fn convert(text: &str) -> ConversionResult<String> {
    let numeral = numeral::Numeral::parse(text)?;
    english::render(&numeral)
}

// Re-exports for convenience
pub mod prelude {
    pub use crate::converter::{
        create_from_config, validate, ConverterConfig, NumberConverter, NumberConverterBuilder,
    };
    pub use crate::convert;
    pub use crate::english::{render, render_chunk, render_integer, SCALES};
    pub use crate::interfaces::{
        ConversionEvent, ConversionObserver, LoggingObserver, NoOpObserver,
    };
    pub use crate::numeral::{
        Chunk, ConversionError, ConversionResult, Magnitude, Numeral, Sign,
    };
}
