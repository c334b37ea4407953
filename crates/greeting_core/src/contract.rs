use serde::{Deserialize, Serialize};

use crate::storage_keys::{greeting_body, greeting_object_key};

/// Second-resolution local wall-clock format embedded in object keys and
/// bodies. Keys are only unique at this granularity; a later write within
/// the same second overwrites the earlier object.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GreetingUpload {
    pub bucket: String,
    pub key: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

pub fn build_greeting_upload(
    bucket: &str,
    timestamp: &str,
) -> Result<GreetingUpload, ValidationError> {
    if bucket.trim().is_empty() {
        return Err(ValidationError::new("bucket name cannot be empty"));
    }

    Ok(GreetingUpload {
        bucket: bucket.to_string(),
        key: greeting_object_key(timestamp),
        body: greeting_body(timestamp),
    })
}
