#![deny(missing_docs)]

//! # CLI Errors
//!
//! Error types for the CLI crate.

use apiplay_core::AppError;
use derive_more::{Display, From};

/// Main error enum for CLI operations.
#[derive(Debug, Display, From)]
pub enum CliError {
    /// IO Error wrapper.
    #[display("IO Error: {}", _0)]
    Io(std::io::Error),

    /// Failure reported by the core library.
    #[display("{}", _0)]
    App(AppError),

    /// General failure message.
    #[display("Operation failed: {}", _0)]
    General(String),
}

/// `General(String)` holds a plain `String`, so `source()` cannot be derived.
impl std::error::Error for CliError {}

/// Result type alias.
pub type CliResult<T> = Result<T, CliError>;
