use aws_sdk_s3::primitives::ByteStream;
use chrono::Local;
use greeting_lambda::adapters::object_store::{ObjectStore, PutReceipt};
use greeting_lambda::handlers::greeting::{handle_greeting_upload, GreetingHandlerConfig};
use greeting_lambda::runtime::contract::TIMESTAMP_FORMAT;
use lambda_runtime::{service_fn, Error, LambdaEvent};

struct S3ObjectStore {
    s3_client: aws_sdk_s3::Client,
}

impl ObjectStore for S3ObjectStore {
    fn put_object(&self, bucket: &str, key: &str, body: &[u8]) -> Result<PutReceipt, String> {
        let bucket = bucket.to_string();
        let object_key = key.to_string();
        let body_bytes = body.to_vec();
        let client = self.s3_client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .put_object()
                    .bucket(bucket)
                    .key(object_key)
                    .body(ByteStream::from(body_bytes))
                    .send()
                    .await
                    .map(|output| PutReceipt {
                        e_tag: output.e_tag().map(str::to_string),
                        version_id: output.version_id().map(str::to_string),
                    })
                    .map_err(|error| format!("failed to write object to s3: {error}"))
            })
        })
    }
}

async fn handle_request(_event: LambdaEvent<serde_json::Value>) -> Result<PutReceipt, Error> {
    let bucket = std::env::var("BUCKET_NAME")
        .map_err(|_| Error::from("BUCKET_NAME must be configured"))?;

    let config = GreetingHandlerConfig {
        bucket,
        timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
    };

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let object_store = S3ObjectStore {
        s3_client: aws_sdk_s3::Client::new(&aws_config),
    };

    handle_greeting_upload(&config, &object_store).map_err(|error| Error::from(error.message))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::run(service_fn(handle_request)).await
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn formats_timestamp_at_second_resolution() {
        let moment = NaiveDate::from_ymd_opt(2026, 2, 14)
            .expect("valid date")
            .and_hms_opt(9, 30, 5)
            .expect("valid time");

        assert_eq!(
            moment.format(TIMESTAMP_FORMAT).to_string(),
            "2026-02-14 09:30:05"
        );
    }

    #[test]
    fn formatted_timestamp_pads_single_digit_fields() {
        let moment = NaiveDate::from_ymd_opt(2026, 1, 2)
            .expect("valid date")
            .and_hms_opt(3, 4, 5)
            .expect("valid time");

        assert_eq!(
            moment.format(TIMESTAMP_FORMAT).to_string(),
            "2026-01-02 03:04:05"
        );
    }
}
