use super::{DecryptError, KeyDecryptor};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_kms::Client;
use aws_sdk_kms::primitives::Blob;
use tracing::info;

#[derive(Clone)]
pub struct KmsService {
    client: Client,
}

impl KmsService {
    pub fn new(sdk_config: &SdkConfig) -> Self {
        info!("✅ KMS client ready");
        Self {
            client: Client::new(sdk_config),
        }
    }
}

#[async_trait]
impl KeyDecryptor for KmsService {
    async fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, DecryptError> {
        let output = self
            .client
            .decrypt()
            .ciphertext_blob(Blob::new(ciphertext))
            .send()
            .await
            .map_err(|e| DecryptError::Service(aws_sdk_kms::Error::from(e).to_string()))?;

        output
            .plaintext
            .map(Blob::into_inner)
            .ok_or(DecryptError::EmptyPlaintext)
    }
}
