use async_trait::async_trait;
use thiserror::Error;

pub mod client;

#[derive(Debug, Error)]
pub enum DecryptError {
    #[error("key management request failed: {0}")]
    Service(String),

    #[error("key management returned no plaintext")]
    EmptyPlaintext,

    #[error("decrypted plaintext is not valid UTF-8")]
    InvalidPlaintext,
}

#[async_trait]
pub trait KeyDecryptor: Send + Sync {
    async fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, DecryptError>;
}
