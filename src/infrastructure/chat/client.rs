use super::{
    ChatAuth, ChatError, Credentials, HEADER_AUTH_TOKEN, HEADER_USER_ID, LOGIN_PATH, LoginResponse,
    UPLOAD_PATH,
};
use bytes::Bytes;
use reqwest::Method;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::{debug, info};
use url::Url;

/// Body of a chat API request.
pub enum Payload {
    Empty,
    Json(Value),
    Multipart(Form),
}

/// Base URL plus HTTP client; sends requests with whatever credentials the
/// caller hands it.
pub(super) struct Transport {
    http: reqwest::Client,
    base_url: String,
}

impl Transport {
    fn url(&self, path: &str) -> Result<Url, ChatError> {
        Ok(Url::parse(&format!("{}{}", self.base_url, path))?)
    }

    /// `segment` percent-encoded as one path segment, with its leading `/`.
    fn path_segment(&self, segment: &str) -> Result<String, ChatError> {
        let mut url = self.url("")?;
        url.path_segments_mut()
            .map_err(|_| ChatError::UnsupportedUrl(self.base_url.clone()))?
            .clear()
            .push(segment);
        Ok(url.path().to_string())
    }

    pub(super) async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        payload: Payload,
        credentials: Option<&Credentials>,
    ) -> Result<T, ChatError> {
        let mut request = self.http.request(method, url);

        if let Some(credentials) = credentials {
            request = request
                .header(HEADER_USER_ID, &credentials.user_id)
                .header(HEADER_AUTH_TOKEN, &credentials.auth_token);
        }

        request = match payload {
            Payload::Empty => request,
            Payload::Json(body) => request.json(&body),
            Payload::Multipart(form) => request.multipart(form),
        };

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::Status { status, body });
        }

        Ok(response.json().await?)
    }

    /// Never decorated with credentials, the login is what produces them.
    pub(super) async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<LoginResponse, ChatError> {
        let creds = json!({
            "username": username,
            "password": password,
        });
        let url = self.url(LOGIN_PATH)?;
        self.send(Method::POST, url, Payload::Json(creds), None)
            .await
    }
}

pub struct ChatClient {
    transport: Transport,
    auth: ChatAuth,
}

impl ChatClient {
    pub fn new(http: reqwest::Client, server_url: &str, auth: ChatAuth) -> Result<Self, ChatError> {
        let base_url = Url::parse(server_url)?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ChatError::UnsupportedUrl(server_url.to_string()));
        }

        Ok(Self {
            transport: Transport {
                http,
                base_url: base_url.as_str().trim_end_matches('/').to_string(),
            },
            auth,
        })
    }

    /// Sends an authenticated request and parses the JSON response.
    pub async fn request<T: DeserializeOwned>(
        &mut self,
        method: Method,
        path: &str,
        payload: Payload,
    ) -> Result<T, ChatError> {
        let url = self.transport.url(path)?;
        let credentials = self.auth.credentials(&self.transport).await?;
        debug!("chat {} {}", method, url.path());
        self.transport
            .send(method, url, payload, Some(credentials))
            .await
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<Credentials, ChatError> {
        Ok(self.transport.login(username, password).await?.data)
    }

    /// Uploads a file to a room as the multipart field `file`.
    pub async fn upload(
        &mut self,
        room_id: &str,
        file_name: &str,
        file: Bytes,
    ) -> Result<Value, ChatError> {
        let mut part = Part::bytes(file.to_vec()).file_name(file_name.to_string());
        if let Some(mime) = guess_mime(file_name) {
            part = part.mime_str(mime.as_ref())?;
        }

        let form = Form::new().part("file", part);
        let path = format!("{}{}", UPLOAD_PATH, self.transport.path_segment(room_id)?);
        let response = self
            .request(Method::POST, &path, Payload::Multipart(form))
            .await?;

        info!("📤 Uploaded {} to room {}", file_name, room_id);
        Ok(response)
    }
}

fn guess_mime(file_name: &str) -> Option<mime::Mime> {
    mime_guess::from_path(file_name).first()
}
