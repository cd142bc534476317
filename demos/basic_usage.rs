// ============================================================================
// Basic Usage Example
// ============================================================================
//
// Run with logging:
//   cargo run --example basic_usage --features logging

use say_the_number::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Say The Number Example ===\n");

    let converter = NumberConverterBuilder::new()
        .with_logging()
        .build()
        .expect("default configuration is valid");

    println!("Direct conversions:");
    for text in ["0", "21", "9999", "-1234567", "0.01", "1.200", "1_000_000_001"] {
        match converter.convert(text) {
            Ok(words) => println!("  {:>16} -> {}", text, words),
            Err(e) => println!("  {:>16} -> error: {}", text, e),
        }
    }

    println!("\nRequest-style conversions:");
    for number in [Some("123.45"), Some("1e5"), None, Some("1000000000000000000000")] {
        let shown = number.unwrap_or("<missing>");
        match converter.convert_request(number) {
            Ok(words) => println!("  {:>22} -> {}", shown, words),
            Err(e) => println!("  {:>22} -> error: {}", shown, e),
        }
    }

    println!("\nRaising the ceiling:");
    let extended = NumberConverterBuilder::new()
        .with_additional_scale("sextillion")
        .with_additional_scale("septillion")
        .build()
        .expect("extended configuration is valid");
    let big = "987_654_321_000_000_000_000_000_001";
    println!("  max exponent: 10^{}", extended.config().max_exponent());
    match extended.convert(big) {
        Ok(words) => println!("  {} -> {}", big, words),
        Err(e) => println!("  {} -> error: {}", big, e),
    }

    println!("\n=== Example Complete ===");
}
