//! Client for the Rocket.Chat REST API.
//!
//! A [`ChatClient`] authenticates either with a fixed user id / token pair or
//! with a username and password. In the second mode the first authenticated
//! request performs a login and the resulting token is reused for the rest of
//! the client's lifetime.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

pub mod auth;
pub mod client;

pub use auth::ChatAuth;
pub use client::ChatClient;

pub const LOGIN_PATH: &str = "/api/v1/login";
pub const UPLOAD_PATH: &str = "/api/v1/rooms.upload";
pub const HEADER_USER_ID: &str = "X-User-Id";
pub const HEADER_AUTH_TOKEN: &str = "X-Auth-Token";

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("invalid chat server url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("chat server url must be http or https: {0}")]
    UnsupportedUrl(String),

    #[error("chat request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("chat server responded with {status}: {body}")]
    Status { status: StatusCode, body: String },
}

/// The user id / token pair sent on every authenticated request.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub user_id: String,
    pub auth_token: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub data: Credentials,
}
