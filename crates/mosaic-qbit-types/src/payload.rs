//! Decoded response bodies.

use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::QbitError;

/// The body of a successful WebUI call.
///
/// Most endpoints answer with JSON, but some (`app/version`, `auth/login`, ...)
/// answer with bare text. Bodies that fail to parse as JSON are kept verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// The body parsed as JSON, with the text it was parsed from.
    Json {
        /// The parsed value.
        value: Value,
        /// The body exactly as received.
        raw: String,
    },
    /// The body was not valid JSON.
    Text(String),
}

impl Payload {
    /// Decodes a response body, falling back to the raw text.
    pub fn decode(body: String) -> Self {
        match serde_json::from_str(&body) {
            Ok(value) => Self::Json { value, raw: body },
            Err(_) => Self::Text(body),
        }
    }

    /// Deserializes the payload into `T`. A text payload is treated as a JSON string,
    /// so `json::<String>()` works for both kinds.
    pub fn json<T: DeserializeOwned>(self) -> Result<T, QbitError> {
        let value = match self {
            Self::Json { value, .. } => value,
            Self::Text(text) => Value::String(text),
        };
        serde_json::from_value(value).map_err(|e| QbitError::Serialization(e.to_string()))
    }

    /// The JSON value, if the body was JSON.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json { value, .. } => Some(value),
            Self::Text(_) => None,
        }
    }

    /// The raw text, if the body was not JSON.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Json { .. } => None,
            Self::Text(text) => Some(text),
        }
    }

    /// Returns the body exactly as received, JSON or not.
    pub fn into_text(self) -> String {
        match self {
            Self::Json { raw, .. } => raw,
            Self::Text(text) => text,
        }
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json { raw, .. } => f.write_str(raw),
            Self::Text(text) => f.write_str(text),
        }
    }
}
