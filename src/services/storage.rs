use anyhow::Result;
use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::primitives::ByteStream;
use std::path::Path;
use tokio::io::AsyncWriteExt;

/// Object store operations needed by the thumbnail flow.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Streams `bucket/key` into a new file at `dest`, returning bytes written.
    async fn download_to_file(&self, bucket: &str, key: &str, dest: &Path) -> Result<u64>;

    async fn upload_file(
        &self,
        bucket: &str,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<()>;
}

pub struct S3StorageService {
    client: Client,
}

impl S3StorageService {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for S3StorageService {
    async fn download_to_file(&self, bucket: &str, key: &str, dest: &Path) -> Result<u64> {
        let res = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await;

        let output = match res {
            Ok(output) => output,
            Err(e) => {
                tracing::error!(
                    "S3 get_object failed: bucket={}, key={}, error={:?}",
                    bucket,
                    key,
                    e
                );
                return Err(e.into());
            }
        };

        let mut reader = Box::pin(output.body.into_async_read());
        let mut file = tokio::fs::File::create(dest).await?;
        let written = tokio::io::copy(&mut reader, &mut file).await?;
        file.flush().await?;
        Ok(written)
    }

    async fn upload_file(
        &self,
        bucket: &str,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<()> {
        let res = self
            .client
            .put_object()
            .bucket(bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(data))
            .send()
            .await;

        if let Err(e) = res {
            tracing::error!(
                "S3 put_object failed: bucket={}, key={}, error={:?}",
                bucket,
                key,
                e
            );
            return Err(e.into());
        }
        Ok(())
    }
}
