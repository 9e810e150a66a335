//! Error types for OMML to LaTeX conversion.
//!
//! Any of these aborts the conversion of the whole equation; no partial
//! output is ever returned alongside an error.
use thiserror::Error;

/// Main error type for equation conversion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The node handed to the converter is not the math root element
    #[error("Invalid structure: expected '{expected}' element, got '{found}'")]
    Structure {
        expected: &'static str,
        found: String,
    },

    /// A function-name run has no entry in the function table
    #[error("Unsupported function name: '{0}'")]
    UnsupportedSymbol(String),

    /// A lower-limit base has no entry in the limit-function table
    #[error("Unsupported limit function: '{0}'")]
    UnsupportedLimitFunction(String),

    /// Attribute lookup on a text fragment. This is a handler defect, not bad input.
    #[error("Cannot read attribute '{name}' from text fragment '{text}'")]
    AttributeAccess { name: &'static str, text: String },

    /// XML parsing error
    #[cfg(feature = "xml")]
    #[error("XML error: {0}")]
    Xml(String),
}

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;
