//! Error types for the codec, the executor and document persistence.

use crate::constants::{URL_COMPONENTS_ERROR, URL_EXTRACT_ERROR};

/// Headers/params editor text that is not a JSON object of strings or nulls.
#[derive(thiserror::Error, Debug)]
pub enum CodecError {
    #[error("mapping text is not valid UTF-8")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    #[error("mapping text is not a JSON object of string or null values: {0}")]
    InvalidMappingText(#[from] serde_json::Error),
}

/// Failures that stop a request before it reaches the network.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("{}", URL_COMPONENTS_ERROR)]
    UrlComponents,

    #[error("{}", URL_EXTRACT_ERROR)]
    UrlExtraction,

    #[error("Invalid header {name:?}")]
    InvalidHeader { name: String },

    /// Headers or params text rejected by the codec; names the field.
    #[error("{field} Invalid JSON object. Use String:String key value pairs only.")]
    InvalidMappingText { field: &'static str },
}

impl RequestError {
    /// Both URL stages count as a malformed URL.
    pub fn is_malformed_url(&self) -> bool {
        matches!(self, RequestError::UrlComponents | RequestError::UrlExtraction)
    }
}

/// Document save/load failures. Fatal to that one operation only.
#[derive(thiserror::Error, Debug)]
pub enum DocumentError {
    #[error("failed to serialize document: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("failed to deserialize document: {0}")]
    Deserialization(#[source] serde_json::Error),

    #[error("document i/o failed: {0}")]
    Io(#[from] std::io::Error),
}
