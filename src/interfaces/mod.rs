// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod conversion_observer;

pub use conversion_observer::{ConversionEvent, ConversionObserver, LoggingObserver, NoOpObserver};
