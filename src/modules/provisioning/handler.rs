use super::dto::{CustomResourceRequest, CustomResourceResponse};
use super::service::ProvisioningService;
use crate::common::extract::JsonBody;
use crate::common::response::{ApiResponse, ApiSuccess};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

/// Create, update or delete the transcoding pipeline for a stack
#[utoipa::path(
    post,
    path = "/api/v1/resources/pipeline",
    request_body = CustomResourceRequest,
    responses(
        (status = 200, description = "Outcome reported to the response URL", body = ApiResponse<CustomResourceResponse>),
        (status = 400, description = "Malformed provisioning request"),
        (status = 502, description = "Response URL rejected the report")
    ),
    tag = "Provisioning"
)]
pub async fn pipeline_resource(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CustomResourceRequest>,
) -> impl IntoResponse {
    match ProvisioningService::handle(&state, request).await {
        Ok(response) => ApiSuccess::ok(response, "Provisioning outcome reported").into_response(),
        Err(e) => e.into_response(),
    }
}
