//! Basic logger usage example
//!
//! Demonstrates level filtering driven by the environment.
//!
//! Run with: DEBUG_LEVEL=DEBUG cargo run --example basic_usage

use ns_debug_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Namespaced Debug Logger - Basic Usage Example ===\n");

    let logger = Logger::new("demo")?;
    println!(
        "Logger 'demo': enabled={} threshold={}",
        logger.is_enabled(),
        logger.threshold()
    );

    // The text formatter adds no newline, so the messages carry their own.
    logger.debug("This is a debug message\n");
    logger.info("This is an info message\n");
    logger.warn("This is a warning message\n");
    std::thread::sleep(std::time::Duration::from_millis(25));
    logger.error("This is an error message, ~25ms after the warning\n");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
