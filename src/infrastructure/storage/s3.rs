use super::{ObjectStore, StorageError};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::Builder;
use bytes::Bytes;
use tracing::{debug, info};

#[derive(Clone)]
pub struct StorageService {
    client: Client,
}

impl StorageService {
    /// `endpoint` points the client at an S3-compatible server (MinIO etc.)
    /// using path-style addressing.
    pub fn new(sdk_config: &SdkConfig, endpoint: Option<&str>) -> Self {
        let mut builder = Builder::from(sdk_config);
        if let Some(endpoint) = endpoint {
            builder = builder.endpoint_url(endpoint).force_path_style(true);
            info!("✅ S3 client using endpoint {}", endpoint);
        } else {
            info!("✅ S3 client ready");
        }

        Self {
            client: Client::from_conf(builder.build()),
        }
    }
}

#[async_trait]
impl ObjectStore for StorageService {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Bytes, StorageError> {
        let fetch_error = |message: String| StorageError::Fetch {
            bucket: bucket.to_string(),
            key: key.to_string(),
            message,
        };

        let output = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| fetch_error(aws_sdk_s3::Error::from(e).to_string()))?;

        let body = output
            .body
            .collect()
            .await
            .map_err(|e| fetch_error(e.to_string()))?
            .into_bytes();

        debug!("⬇️ Downloaded {} bytes from s3://{}/{}", body.len(), bucket, key);
        Ok(body)
    }
}
