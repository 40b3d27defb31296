use super::dto::{DeliveryReport, JobState, JobStatusNotification, SnsEvent};
use crate::common::error::AppError;
use crate::config::env::EnvKey;
use crate::config::settings::{ChatConfig, ConfigError};
use crate::infrastructure::chat::{ChatAuth, ChatClient};
use crate::infrastructure::kms::{DecryptError, KeyDecryptor};
use crate::infrastructure::storage::ObjectStore;
use crate::state::AppState;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::{debug, info};

pub struct DeliveryService;

impl DeliveryService {
    /// Uploads the outputs of every completed job to the chat room. Other
    /// job states are ignored.
    pub async fn deliver(state: &AppState, event: SnsEvent) -> Result<Vec<DeliveryReport>, AppError> {
        debug!("EVENT: {:?}", event);

        let config = state.config.chat()?;
        let password = Self::decrypt_password(state.kms.as_ref(), &config.encrypted_password).await?;
        let mut chat = ChatClient::new(
            state.http.clone(),
            &config.server_url,
            ChatAuth::login(config.username.as_str(), password),
        )
        .map_err(|e| ConfigError::Invalid(EnvKey::RocketServer.as_str(), e.to_string()))?;

        let mut reports = Vec::with_capacity(event.records.len());
        for record in event.records {
            let job: JobStatusNotification = serde_json::from_str(&record.sns.message)?;
            let report = Self::deliver_job(state.storage.as_ref(), &mut chat, config, job).await?;
            reports.push(report);
        }

        Ok(reports)
    }

    pub async fn decrypt_password(
        kms: &dyn KeyDecryptor,
        encrypted_password: &str,
    ) -> Result<String, AppError> {
        let ciphertext = STANDARD
            .decode(encrypted_password.trim())
            .map_err(|e| ConfigError::Invalid(EnvKey::RocketPassword.as_str(), e.to_string()))?;

        let plaintext = kms.decrypt(&ciphertext).await?;
        String::from_utf8(plaintext).map_err(|_| DecryptError::InvalidPlaintext.into())
    }

    async fn deliver_job(
        storage: &dyn ObjectStore,
        chat: &mut ChatClient,
        config: &ChatConfig,
        job: JobStatusNotification,
    ) -> Result<DeliveryReport, AppError> {
        let mut uploaded = Vec::new();

        if job.state == JobState::Completed {
            for output in &job.outputs {
                let body = storage.get_object(&config.artifact_bucket, &output.key).await?;
                chat.upload(&config.room_id, &output.key, body).await?;
                uploaded.push(output.key.clone());
            }
            info!("✅ Delivered {} GIF(s) to room {}", uploaded.len(), config.room_id);
        } else {
            debug!("ignoring job {:?} in state {:?}", job.job_id, job.state);
        }

        Ok(DeliveryReport {
            state: job.state,
            job_id: job.job_id,
            uploaded,
        })
    }
}
