use serde_json::json;

use crate::adapters::object_store::{ObjectStore, PutReceipt};
use crate::runtime::contract::build_greeting_upload;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingHandlerConfig {
    pub bucket: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingHandlerError {
    pub message: String,
}

pub fn handle_greeting_upload(
    config: &GreetingHandlerConfig,
    object_store: &impl ObjectStore,
) -> Result<PutReceipt, GreetingHandlerError> {
    // A misconfigured bucket fails before the store is reached and without
    // an error log record.
    let upload =
        build_greeting_upload(&config.bucket, &config.timestamp).map_err(|error| {
            GreetingHandlerError {
                message: error.message().to_string(),
            }
        })?;

    log_greeting_info(
        "upload_started",
        json!({
            "bucket": upload.bucket.clone(),
            "key": upload.key.clone(),
        }),
    );

    match object_store.put_object(&upload.bucket, &upload.key, upload.body.as_bytes()) {
        Ok(receipt) => {
            log_greeting_info(
                "upload_completed",
                json!({
                    "bucket": upload.bucket,
                    "key": upload.key,
                    "e_tag": receipt.e_tag.clone(),
                }),
            );
            Ok(receipt)
        }
        Err(error) => {
            log_greeting_error(
                "upload_failed",
                json!({
                    "bucket": upload.bucket,
                    "key": upload.key,
                    "error": error.clone(),
                }),
            );
            Err(GreetingHandlerError { message: error })
        }
    }
}

fn log_greeting_info(event: &str, details: serde_json::Value) {
    eprintln!(
        "{}",
        json!({
            "component": "greeting_handler",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}

fn log_greeting_error(event: &str, details: serde_json::Value) {
    eprintln!(
        "{}",
        json!({
            "component": "greeting_handler",
            "level": "error",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}
