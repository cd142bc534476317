// ============================================================================
// Numeral Module
// Lexical parsing of decimal numeral text
// ============================================================================
//
// This module provides:
// - Numeral: sign, integer magnitude and fraction digits of one input
// - Magnitude / Chunk: unbounded integer value and its base-1000 groups
// - ConversionError: error type shared by parsing, rendering and the boundary
//
// Design principles:
// - No floating-point or fixed-width integer holds the integer part
// - All parsing returns Result (no panics)
// - Digits stay as decimal text from input to output

mod errors;
mod magnitude;
mod parser;

pub use errors::{ConversionError, ConversionResult};
pub use magnitude::{Chunk, Chunks, Magnitude};
pub use parser::{Numeral, Sign, DEFAULT_GROUPING_SEPARATOR};
