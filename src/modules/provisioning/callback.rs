use super::dto::CustomResourceResponse;
use crate::common::error::AppError;
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};
use tracing::{debug, info};

/// PUTs the response document to the framework's pre-signed URL. The URL is
/// signed for an empty content type, so none is sent.
pub async fn send_response(
    http: &reqwest::Client,
    response_url: &str,
    response: &CustomResourceResponse,
) -> Result<(), AppError> {
    let body = serde_json::to_string(response).map_err(|e| AppError::Callback(e.to_string()))?;
    debug!("Response body: {}", body);

    let result = http
        .put(response_url)
        .header(CONTENT_TYPE, "")
        .header(CONTENT_LENGTH, body.len())
        .body(body)
        .send()
        .await
        .map_err(|e| AppError::Callback(e.to_string()))?;

    let status = result.status();
    if !status.is_success() {
        return Err(AppError::Callback(format!("response URL returned {}", status)));
    }

    info!("Status code: {}", status);
    Ok(())
}
