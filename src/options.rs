//! Formatting options.

use serde::{Deserialize, Serialize};

/// Options accepted by the representers.
///
/// Deserialization treats the source as an open mapping: recognized fields
/// keep their defaults when absent, unrecognized keys are ignored, so
/// callers can pass option documents from newer tool versions without
/// breaking this crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Append millisecond precision (`.mmm`) to rendered timestamps.
    pub show_millis: bool,
}

impl FormatOptions {
    /// Parse options from a JSON document, ignoring unknown keys.
    ///
    /// # Errors
    /// Returns an error when the document is not a JSON object of the
    /// expected field types.
    pub fn from_json(document: &str) -> serde_json::Result<Self> {
        serde_json::from_str(document)
    }
}
