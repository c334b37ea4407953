use serde::{Deserialize, Serialize};

/// Provider response for a completed object write, returned to the
/// invocation caller unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PutReceipt {
    pub e_tag: Option<String>,
    pub version_id: Option<String>,
}

pub trait ObjectStore {
    fn put_object(&self, bucket: &str, key: &str, body: &[u8]) -> Result<PutReceipt, String>;
}
