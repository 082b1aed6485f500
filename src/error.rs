use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimfigError {
    #[error("Nesting depth exceeded for: '{text}'")]
    DepthExceeded { text: String },

    #[error("Unbalanced parenthesis in template variable for: '{text}'")]
    UnbalancedParenthesis { text: String },

    #[error("Missing template variable: '{name}'")]
    MissingVariable { name: String },

    #[error("Variable syntax error: '{token}'")]
    VariableSyntax { token: String },

    #[error("Option '{name}' with value '{value}' not within valid boundaries [{min} - {max}]")]
    OutOfRange {
        name: String,
        value: String,
        min: String,
        max: String,
    },

    #[error("Acceptable values for '{name}' are '1' or '0'")]
    InvalidBool { name: String },

    #[error("Option '{name}' with value '{value}' is not a valid duration")]
    InvalidDuration { name: String, value: String },

    #[error("Option '{name}' has been deprecated. Please use option '{replacement}' instead.")]
    Deprecated { name: String, replacement: String },

    #[error("{context}: Unexpected parameter '{name}'.")]
    UnexpectedParameter { context: String, name: String },

    #[error("{context}: Unexpected parameter '{token}'. Expected format: name=value")]
    MissingValue { context: String, token: String },

    #[error("Unexpected parameter '{token}'. Expected format: name=value")]
    UnknownToken { token: String },

    #[error("Unable to open input parameter file '{path}'")]
    InputFileNotFound { path: PathBuf },

    #[error("Failed to read {origin}: {source}")]
    Io {
        origin: String,
        source: std::io::Error,
    },
}
