/*!
 * Error types for the vmdtex application.
 *
 * Parsing and rendering never fail. These types cover the checks done
 * around them: deck-level preconditions of the driver, configuration and
 * file handling, using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors raised while preparing a parsed deck for rendering
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    /// A slide has no (or an empty) `lang` parameter
    #[error("Slide missing 'lang' attribute (scene '{scene}', element {position})")]
    MissingLanguage {
        /// Title of the scene holding the slide
        scene: String,
        /// 1-based position of the element inside its scene
        position: usize,
    },

    /// Validation findings made the check fail
    #[error("Deck failed validation with {0} finding(s)")]
    Invalid(usize),
}

/// Errors in the configuration file or its values
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be parsed
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is out of range or empty
    #[error("Invalid config value for '{field}': {message}")]
    InvalidValue {
        /// Dotted path of the offending field
        field: String,
        /// What is wrong with it
        message: String,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from deck checks
    #[error("Deck error: {0}")]
    Deck(#[from] DeckError),

    /// Error from configuration
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
