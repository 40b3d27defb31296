use crate::config::settings::AppConfig;
use crate::infrastructure::kms::KeyDecryptor;
use crate::infrastructure::storage::ObjectStore;
use crate::infrastructure::transcoder::Transcoder;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub transcoder: Arc<dyn Transcoder>,
    pub storage: Arc<dyn ObjectStore>,
    pub kms: Arc<dyn KeyDecryptor>,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        transcoder: Arc<dyn Transcoder>,
        storage: Arc<dyn ObjectStore>,
        kms: Arc<dyn KeyDecryptor>,
        http: reqwest::Client,
    ) -> Self {
        Self {
            config,
            transcoder,
            storage,
            kms,
            http,
        }
    }
}
