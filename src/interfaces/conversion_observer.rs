// ============================================================================
// Conversion Observer Interface
// Defines the contract for reacting to conversion outcomes
// ============================================================================

use crate::numeral::ConversionError;

/// Outcome of one conversion, borrowed from the converter for the duration
/// of the callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionEvent<'a> {
    /// Numeral rendered successfully
    Converted { input: &'a str, words: &'a str },

    /// Numeral rejected; no words were produced
    Rejected {
        input: &'a str,
        error: &'a ConversionError,
    },
}

impl ConversionEvent<'_> {
    /// The raw text the caller passed in.
    pub fn input(&self) -> &str {
        match self {
            ConversionEvent::Converted { input, .. } => *input,
            ConversionEvent::Rejected { input, .. } => *input,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, ConversionEvent::Rejected { .. })
    }
}

/// Observer trait for conversion outcomes.
/// Implementations can handle logging, metrics, auditing, etc.
pub trait ConversionObserver: Send + Sync {
    /// Handle a conversion event
    fn on_event(&self, event: &ConversionEvent<'_>);
}

/// No-op observer, the default
pub struct NoOpObserver;

impl ConversionObserver for NoOpObserver {
    fn on_event(&self, _event: &ConversionEvent<'_>) {
        // Do nothing
    }
}

/// Logging observer
pub struct LoggingObserver;

impl ConversionObserver for LoggingObserver {
    fn on_event(&self, event: &ConversionEvent<'_>) {
        match event {
            ConversionEvent::Converted { input, words } => {
                tracing::debug!(input = %input, words = %words, "numeral converted");
            },
            ConversionEvent::Rejected { input, error } => {
                tracing::debug!(input = %input, error = %error, "numeral rejected");
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_observer() {
        let observer = NoOpObserver;
        observer.on_event(&ConversionEvent::Converted {
            input: "1",
            words: "one",
        });
        // Should not panic
    }

    #[test]
    fn test_logging_observer_without_subscriber() {
        let error = ConversionError::EmptyInput;
        let event = ConversionEvent::Rejected {
            input: "",
            error: &error,
        };
        LoggingObserver.on_event(&event);
        assert!(event.is_rejected());
        assert_eq!(event.input(), "");
    }
}
