use serde::Deserialize;

use crate::error::ThumbnailError;
use crate::utils::keys::decode_object_key;

/// S3 "object created" notification as delivered to the function.
#[derive(Debug, Clone, Deserialize)]
pub struct TriggerEvent {
    #[serde(rename = "Records")]
    pub records: Vec<TriggerRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TriggerRecord {
    pub s3: S3Entity,
}

#[derive(Debug, Clone, Deserialize)]
pub struct S3Entity {
    pub bucket: S3Bucket,
    pub object: S3Object,
}

#[derive(Debug, Clone, Deserialize)]
pub struct S3Bucket {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct S3Object {
    /// URL-encoded, spaces arrive as `+`
    pub key: String,
}

/// Bucket and decoded key of the object that triggered an invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectRef {
    pub bucket: String,
    pub key: String,
}

impl TriggerEvent {
    /// Resolves the first record only; later records in a batch are ignored.
    pub fn object_ref(&self) -> Result<ObjectRef, ThumbnailError> {
        let record = self.records.first().ok_or(ThumbnailError::InvalidEvent)?;
        Ok(ObjectRef {
            bucket: record.s3.bucket.name.clone(),
            key: decode_object_key(&record.s3.object.key)?,
        })
    }
}

/// Result of a completed invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum ThumbnailOutcome {
    /// The key did not match the video extension; nothing was done.
    Skipped { key: String },
    Uploaded {
        bucket: String,
        image_key: String,
        seek_seconds: u64,
    },
}
