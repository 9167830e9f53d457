//! # Error Types
//!
//! Structured error types for calc_core. Lookups against the page document,
//! config loading, and field resolution all report through [`CalcError`] so
//! front ends can log the failure and still show the rest of the page.
//!
//! Malformed numeric text is *not* an error: it coerces to zero (see
//! [`crate::coerce`]). Only structural problems end up here.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::dom::Document;
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn require(doc: &Document, selector: &str) -> CalcResult<()> {
//!     doc.query_selector(selector)
//!         .map(|_| ())
//!         .ok_or_else(|| CalcError::element_not_found(selector))
//! }
//!
//! let doc = Document::new();
//! assert!(require(&doc, "#layers").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for page setup and configuration.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A required container or output element is absent from the document
    #[error("Element not found: no element matches '{selector}'")]
    ElementNotFound { selector: String },

    /// A field name does not belong to the calculator group
    #[error("Unknown field '{field}' for calculator group '{group}'")]
    UnknownField { group: String, field: String },

    /// A selector string could not be parsed
    #[error("Invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create an ElementNotFound error
    pub fn element_not_found(selector: impl Into<String>) -> Self {
        CalcError::ElementNotFound {
            selector: selector.into(),
        }
    }

    /// Create an UnknownField error
    pub fn unknown_field(group: impl Into<String>, field: impl Into<String>) -> Self {
        CalcError::UnknownField {
            group: group.into(),
            field: field.into(),
        }
    }

    /// Create an InvalidSelector error
    pub fn invalid_selector(selector: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidSelector {
            selector: selector.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::ElementNotFound { .. } => "ELEMENT_NOT_FOUND",
            CalcError::UnknownField { .. } => "UNKNOWN_FIELD",
            CalcError::InvalidSelector { .. } => "INVALID_SELECTOR",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}
