// ============================================================================
// Converter Module
// Configured entry point that ties parsing, rendering and validation together
// ============================================================================

mod boundary;
mod config;
mod number_converter;

pub mod factory;

pub use boundary::validate;
pub use config::ConverterConfig;
pub use factory::{create_from_config, NumberConverterBuilder};
pub use number_converter::NumberConverter;
