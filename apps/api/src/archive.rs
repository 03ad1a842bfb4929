use aws_config::Region;
use aws_sdk_s3::config::Credentials;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use tracing::info;
use uuid::Uuid;

use crate::config::ArchiveConfig;
use crate::decode::DocumentKind;
use crate::errors::AppError;

/// Keeps a copy of every uploaded source document in S3 / MinIO.
#[derive(Clone)]
pub struct DocumentArchive {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl DocumentArchive {
    /// Constructs an S3 client configured for MinIO (local) or AWS (production).
    pub async fn connect(config: &ArchiveConfig) -> Self {
        let credentials = Credentials::new(
            &config.aws_access_key_id,
            &config.aws_secret_access_key,
            None,
            None,
            "resume-api-static",
        );

        let s3_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .credentials_provider(credentials)
            .endpoint_url(&config.s3_endpoint)
            .load()
            .await;

        Self {
            client: aws_sdk_s3::Client::new(&s3_config),
            bucket: config.s3_bucket.clone(),
        }
    }

    /// Uploads the original document and returns its object key.
    pub async fn put_document(
        &self,
        user_id: Uuid,
        parse_id: Uuid,
        kind: DocumentKind,
        body: Bytes,
    ) -> Result<String, AppError> {
        let key = archive_key(user_id, parse_id, kind);
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .body(ByteStream::from(body))
            .content_type(kind.mime())
            .send()
            .await
            .map_err(|e| AppError::Storage(format!("S3 upload failed: {e}")))?;

        info!("Archived source document to s3://{}/{}", self.bucket, key);
        Ok(key)
    }
}

pub fn archive_key(user_id: Uuid, parse_id: Uuid, kind: DocumentKind) -> String {
    format!("uploads/{}/{}.{}", user_id, parse_id, kind.as_str())
}
