use crate::state::AppState;
use axum::Router;
use axum::routing::post;

pub mod dto;
pub mod handler;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new().route("/motion-video", post(handler::new_motion_video))
}
