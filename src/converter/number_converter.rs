// ============================================================================
// Number Converter
// Parse numeral text and render it as English words
// ============================================================================

use super::boundary;
use super::config::ConverterConfig;
use crate::english;
use crate::interfaces::{ConversionEvent, ConversionObserver, NoOpObserver};
use crate::numeral::{ConversionError, ConversionResult, Numeral};
use std::sync::Arc;

/// Stateless numeral-to-words converter.
///
/// Holds only immutable configuration, so one instance can be shared by any
/// number of threads.
pub struct NumberConverter {
    /// Scales and separator handling
    config: ConverterConfig,

    /// Observer notified of every outcome
    observer: Arc<dyn ConversionObserver>,
}

impl NumberConverter {
    /// Create a converter after validating `config`.
    ///
    /// # Errors
    /// `InvalidConfig` with the validation message.
    pub fn new(
        config: ConverterConfig,
        observer: Arc<dyn ConversionObserver>,
    ) -> ConversionResult<Self> {
        config.validate().map_err(ConversionError::InvalidConfig)?;
        Ok(Self { config, observer })
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Parse `text` with this converter's separator setting.
    pub fn parse(&self, text: &str) -> ConversionResult<Numeral> {
        Numeral::parse_with_separator(text, self.config.grouping_separator)
    }

    /// Render an already parsed numeral with this converter's scales.
    pub fn render(&self, numeral: &Numeral) -> ConversionResult<String> {
        english::render_with_scales(numeral, self.config.scales.as_slice())
    }

    /// Convert numeral text to words.
    ///
    /// # Example
    /// ```
    /// use say_the_number::converter::NumberConverter;
    ///
    /// let converter = NumberConverter::default();
    /// assert_eq!(converter.convert("21").unwrap(), "twenty one");
    /// ```
    pub fn convert(&self, text: &str) -> ConversionResult<String> {
        tracing::trace!(input = %text, "converting numeral");

        let result = self.parse(text).and_then(|numeral| self.render(&numeral));
        self.notify(text, &result);
        result
    }

    /// Convert a `rust_decimal::Decimal`.
    pub fn convert_decimal(&self, value: rust_decimal::Decimal) -> ConversionResult<String> {
        let text = value.to_string();
        let result = Numeral::from_decimal(value).and_then(|numeral| self.render(&numeral));
        self.notify(&text, &result);
        result
    }

    /// Validate a request's `number` value, then convert it.
    ///
    /// This is the full contract a request handler forwards: either the
    /// words or an error whose message goes back to the client unchanged.
    pub fn convert_request(&self, number: Option<&str>) -> ConversionResult<String> {
        match boundary::validate(number) {
            Ok(text) => self.convert(text),
            Err(e) => {
                self.notify(number.unwrap_or_default(), &Err(e.clone()));
                Err(e)
            },
        }
    }

    fn notify(&self, input: &str, result: &ConversionResult<String>) {
        let event = match result {
            Ok(words) => ConversionEvent::Converted {
                input,
                words: words.as_str(),
            },
            Err(error) => {
                tracing::debug!(input = %input, error = %error, "conversion failed");
                ConversionEvent::Rejected { input, error }
            },
        };
        self.observer.on_event(&event);
    }
}

impl Default for NumberConverter {
    fn default() -> Self {
        Self {
            config: ConverterConfig::default(),
            observer: Arc::new(NoOpObserver),
        }
    }
}
