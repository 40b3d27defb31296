use crate::config::env::{self, EnvKey};
use thiserror::Error;
use tracing::warn;

const DEFAULT_LOG_STREAM: &str = "motion-pipeline";

#[derive(Clone, Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{0} is invalid: {1}")]
    Invalid(&'static str, String),
}

/// Settings for delivering finished GIFs to the chat room.
#[derive(Clone, Debug)]
pub struct ChatConfig {
    pub username: String,
    /// Base64 of the KMS ciphertext; decrypted per invocation.
    pub encrypted_password: String,
    pub server_url: String,
    pub room_id: String,
    pub artifact_bucket: String,
}

impl ChatConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            username: required(EnvKey::RocketUsername)?,
            encrypted_password: required(EnvKey::RocketPassword)?,
            server_url: required(EnvKey::RocketServer)?,
            room_id: required(EnvKey::RocketRoomId)?,
            artifact_bucket: required(EnvKey::PipelineBucket)?,
        })
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server_port: u16,
    pub max_body_bytes: usize,
    pub stack_name: Option<String>,
    pub chat: Result<ChatConfig, ConfigError>,
    pub log_stream_name: String,
    pub s3_endpoint: Option<String>,
}

impl AppConfig {
    /// Loads the process configuration. Handler-specific groups are optional
    /// here; the handler that needs a missing group fails when invoked.
    pub fn new() -> Self {
        let stack_name = env::get(EnvKey::StackName).ok();
        if stack_name.is_none() {
            warn!("{} is not set, motion-video events will be rejected", EnvKey::StackName.as_str());
        }

        let chat = ChatConfig::from_env();
        if let Err(e) = &chat {
            warn!("chat delivery disabled: {}", e);
        }

        Self {
            server_port: env::get_parsed(EnvKey::ServerPort, 3000),
            max_body_bytes: env::get_parsed(EnvKey::MaxBodyBytes, 1024 * 1024),
            stack_name,
            chat,
            log_stream_name: env::get_or(EnvKey::LogStreamName, DEFAULT_LOG_STREAM),
            s3_endpoint: env::get(EnvKey::S3Endpoint).ok(),
        }
    }

    pub fn stack_name(&self) -> Result<&str, ConfigError> {
        self.stack_name
            .as_deref()
            .ok_or(ConfigError::Missing(EnvKey::StackName.as_str()))
    }

    pub fn chat(&self) -> Result<&ChatConfig, ConfigError> {
        self.chat.as_ref().map_err(Clone::clone)
    }
}

fn required(key: EnvKey) -> Result<String, ConfigError> {
    let name = key.as_str();
    env::get(key).map_err(|_| ConfigError::Missing(name))
}
