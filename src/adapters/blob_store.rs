use std::path::Path;

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use tracing::info;

use crate::adapters::BlobStore;
use crate::common::errors::BookError;

#[derive(Debug, Clone)]
pub struct S3BlobStore {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl S3BlobStore {
    pub fn new(client: aws_sdk_s3::Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl BlobStore for S3BlobStore {
    async fn upload_file(&self, key: &str, path: &Path) -> Result<(), BookError> {
        let body = ByteStream::from_path(path)
            .await
            .map_err(BookError::blob_store)?;

        info!("Uploading {} to s3://{}/{}", path.display(), self.bucket, key);
        let output = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(body)
            .send()
            .await
            .map_err(BookError::blob_store)?;

        info!("Uploaded, etag: {}", output.e_tag().unwrap_or("none"));
        Ok(())
    }
}
