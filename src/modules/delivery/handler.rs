use super::dto::{DeliveryReport, SnsEvent};
use super::service::DeliveryService;
use crate::common::extract::JsonBody;
use crate::common::response::{ApiResponse, ApiSuccess};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

/// Post finished GIFs to the configured chat room
#[utoipa::path(
    post,
    path = "/api/v1/events/motion-gifs",
    request_body = SnsEvent,
    responses(
        (status = 200, description = "Notifications processed", body = ApiResponse<Vec<DeliveryReport>>),
        (status = 400, description = "Malformed event or job status message"),
        (status = 500, description = "Chat delivery is not configured"),
        (status = 502, description = "Storage, key management or chat request failed")
    ),
    tag = "Events"
)]
pub async fn new_motion_gifs(
    State(state): State<AppState>,
    JsonBody(event): JsonBody<SnsEvent>,
) -> impl IntoResponse {
    match DeliveryService::deliver(&state, event).await {
        Ok(reports) => ApiSuccess::ok(reports, "Job notifications processed").into_response(),
        Err(e) => e.into_response(),
    }
}
