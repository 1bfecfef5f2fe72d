//! Wordgen - deterministic word list generation
//!
//! Writes every combination of an alphabet for each length in a range,
//! one word per line, optionally wrapped in a prefix and suffix.

pub mod alphabet;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod sink;
pub mod types;

// Re-export commonly used types
pub use alphabet::{Alphabet, Preset};
pub use config::{Profile, Settings};
pub use error::{ErrorCategory, Result, WordgenError};
pub use sink::OutputTarget;
pub use types::{Decoration, GenerationConfig, LengthRange};

// Re-export main functionality
pub use engine::{enumerate, total_words, Engine, EnumerationSummary, Odometer, Words};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
