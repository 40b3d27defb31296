use crate::state::AppState;
use axum::Router;
use axum::routing::post;

pub mod callback;
pub mod dto;
pub mod handler;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new().route("/pipeline", post(handler::pipeline_resource))
}
