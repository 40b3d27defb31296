use super::dto::{S3Event, ScheduledJob};
use super::service::MotionService;
use crate::common::extract::JsonBody;
use crate::common::response::{ApiResponse, ApiSuccess};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

/// Schedule GIF transcoding for new motion recordings
#[utoipa::path(
    post,
    path = "/api/v1/events/motion-video",
    request_body = S3Event,
    responses(
        (status = 202, description = "Jobs submitted", body = ApiResponse<Vec<ScheduledJob>>),
        (status = 400, description = "Malformed event"),
        (status = 500, description = "No pipeline matches the configured stack name"),
        (status = 502, description = "Transcoder request failed")
    ),
    tag = "Events"
)]
pub async fn new_motion_video(
    State(state): State<AppState>,
    JsonBody(event): JsonBody<S3Event>,
) -> impl IntoResponse {
    match MotionService::schedule_gifs(&state, event).await {
        Ok(jobs) => ApiSuccess::accepted(jobs, "GIF transcoding scheduled").into_response(),
        Err(e) => e.into_response(),
    }
}
