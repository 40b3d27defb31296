use crate::common::response::ApiResponse;
use crate::config::settings::ConfigError;
use crate::infrastructure::chat::ChatError;
use crate::infrastructure::kms::DecryptError;
use crate::infrastructure::storage::StorageError;
use crate::infrastructure::transcoder::TranscoderError;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("no transcoding pipeline name contains '{0}'")]
    PipelineNotFound(String),

    #[error(transparent)]
    Transcoder(#[from] TranscoderError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Decrypt(#[from] DecryptError),

    #[error(transparent)]
    Chat(#[from] ChatError),

    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    #[error("provisioning callback failed: {0}")]
    Callback(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidPayload(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidPayload(rejection.body_text())
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_) | AppError::PipelineNotFound(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Transcoder(_)
            | AppError::Storage(_)
            | AppError::Decrypt(_)
            | AppError::Chat(_)
            | AppError::Callback(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();
        error!("❌ invocation failed ({}): {}", status, message);
        (status, Json(ApiResponse::<()>::error(&message))).into_response()
    }
}
