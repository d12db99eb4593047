//! # Magic Core
//!
//! Core pieces of the magic tour, including:
//! - A small dynamically typed [`Value`]
//! - Argument binding for fixed, defaulted and variadic parameters
//! - A gallery of toy functions exercising every parameter shape
//! - The [`Computer`] type with operator-style behaviour
//! - A versioned persistence codec for round-tripping values through files
//!
//! The `magic-demo` crate builds the runnable walkthroughs on top of this.

#![warn(clippy::all)]

pub mod args;
pub mod computer;
pub mod gallery;
pub mod notifier;
pub mod persist;
pub mod value;

use std::path::PathBuf;

// Re-export commonly used types
pub use args::{Args, Bound, CallError, Param, Signature};
pub use computer::{Computer, PLACEHOLDER};
pub use gallery::Gallery;
pub use notifier::{CaptureNotifier, ConsoleNotifier, Notifier};
pub use persist::{Format, Persist, PersistError, Record};
pub use value::Value;

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Base name of the file holding the persisted mapping
pub const RECORD_FILE_STEM: &str = "blaine";

/// Base name of the file holding the persisted computer
pub const COMPUTER_FILE_STEM: &str = "computer";

/// Initialize tracing for magic components at the level `config` asks for.
///
/// Logs go to stderr so that stdout carries only demo output. Calling this
/// twice is harmless; the second subscriber is simply not installed.
pub fn init_tracing(config: &MagicConfig) {
    let level = config.log_level();
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    for crate_name in ["magic_core", "magic_demo"] {
        if let Ok(directive) = format!("{crate_name}={level}").parse() {
            filter = filter.add_directive(directive);
        }
    }

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Runtime configuration for the demos
#[derive(Debug, Clone)]
pub struct MagicConfig {
    /// Directory the persisted files are written to
    pub output_dir: PathBuf,
    /// Encoding used for persisted files
    pub format: Format,
    /// Enable debug logging
    pub debug: bool,
}

impl MagicConfig {
    /// Level applied to the magic crates' log targets
    pub fn log_level(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info"
        }
    }

    /// Path of the persisted mapping
    pub fn record_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("{RECORD_FILE_STEM}.{}", self.format.extension()))
    }

    /// Path of the persisted computer
    pub fn computer_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("{COMPUTER_FILE_STEM}.{}", self.format.extension()))
    }

    /// Create the output directory if it doesn't exist
    pub fn prepare_output_dir(&self) -> Result<()> {
        if self.output_dir.exists() && !self.output_dir.is_dir() {
            return Err(MagicError::Config(format!(
                "output path {} is not a directory",
                self.output_dir.display()
            )));
        }
        std::fs::create_dir_all(&self.output_dir)?;
        Ok(())
    }
}

impl Default for MagicConfig {
    fn default() -> Self {
        Self {
            output_dir: ".".into(),
            format: Format::Binary,
            debug: false,
        }
    }
}

/// Error types for magic core operations
#[derive(thiserror::Error, Debug)]
pub enum MagicError {
    /// Calling a gallery function failed
    #[error("Call error: {0}")]
    Call(#[from] CallError),

    /// Persisting or restoring a value failed
    #[error("Persistence error: {0}")]
    Persist(#[from] PersistError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem error outside the codec
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for magic core operations
pub type Result<T> = std::result::Result<T, MagicError>;
