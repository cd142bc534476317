// ============================================================================
// Converter Factory
// Creates number converters with a fluent builder
// ============================================================================

use super::config::ConverterConfig;
use super::number_converter::NumberConverter;
use crate::interfaces::{ConversionObserver, LoggingObserver, NoOpObserver};
use crate::numeral::ConversionResult;
use std::sync::Arc;

/// Creates a converter from configuration
///
/// # Example
/// ```
/// use say_the_number::prelude::*;
/// use std::sync::Arc;
///
/// let config = ConverterConfig::new().with_additional_scale("sextillion");
/// let converter = create_from_config(config, Arc::new(NoOpObserver)).unwrap();
/// assert_eq!(converter.config().max_exponent(), 24);
/// ```
pub fn create_from_config(
    config: ConverterConfig,
    observer: Arc<dyn ConversionObserver>,
) -> ConversionResult<NumberConverter> {
    NumberConverter::new(config, observer)
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating converters with fluent API
///
/// # Example
/// ```
/// use say_the_number::prelude::*;
///
/// let converter = NumberConverterBuilder::new()
///     .with_grouping_separator(',')
///     .with_logging()
///     .build()
///     .unwrap();
/// assert_eq!(converter.convert("1,000").unwrap(), "one thousand");
/// ```
pub struct NumberConverterBuilder {
    config: ConverterConfig,
    observer: Arc<dyn ConversionObserver>,
}

impl NumberConverterBuilder {
    /// Start from the default English configuration
    pub fn new() -> Self {
        Self {
            config: ConverterConfig::new(),
            observer: Arc::new(NoOpObserver),
        }
    }

    /// Replace the scale table
    pub fn with_scales<I, S>(mut self, scales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config = self.config.with_scales(scales);
        self
    }

    /// Append a scale word above the current highest
    pub fn with_additional_scale(mut self, scale: impl Into<String>) -> Self {
        self.config = self.config.with_additional_scale(scale);
        self
    }

    pub fn with_grouping_separator(mut self, separator: char) -> Self {
        self.config = self.config.with_grouping_separator(separator);
        self
    }

    pub fn without_grouping_separator(mut self) -> Self {
        self.config = self.config.without_grouping_separator();
        self
    }

    /// Use a custom observer
    pub fn with_observer(mut self, observer: Arc<dyn ConversionObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Log every outcome through `tracing`
    pub fn with_logging(self) -> Self {
        self.with_observer(Arc::new(LoggingObserver))
    }

    /// Build the converter
    pub fn build(self) -> ConversionResult<NumberConverter> {
        create_from_config(self.config, self.observer)
    }
}

impl Default for NumberConverterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
