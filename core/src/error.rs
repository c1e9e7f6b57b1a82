//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.
//!
//! Only boundary operations fail: decoding document text, loading configuration,
//! and looking up operations. Everything that works on an already decoded tree is total.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// The document or config text could not be decoded as YAML/JSON.
    #[from(ignore)]
    #[display("Parse Error: {_0}")]
    Parse(String),

    /// A configuration value is present but invalid.
    #[from(ignore)]
    #[display("Config Error: {_0}")]
    Config(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_io_conversion() {
        let io_err = Error::new(ErrorKind::NotFound, "missing openapi.yaml");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
    }

    #[test]
    fn test_string_conversion() {
        // String defaults to General, never Parse or Config
        let msg = String::from("something wrong");
        let app_err: AppError = msg.into();
        match app_err {
            AppError::General(s) => assert_eq!(s, "something wrong"),
            _ => panic!("String should convert to AppError::General"),
        }
    }

    #[test]
    fn test_display_prefixes() {
        let parse = AppError::Parse("bad indent".into());
        assert_eq!(format!("{}", parse), "Parse Error: bad indent");

        let config = AppError::Config("baseUrl missing".into());
        assert_eq!(format!("{}", config), "Config Error: baseUrl missing");
    }
}
