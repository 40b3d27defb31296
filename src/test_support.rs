//! In-memory collaborators and local HTTP servers shared by the unit tests.

use crate::config::settings::{AppConfig, ChatConfig};
use crate::infrastructure::kms::{DecryptError, KeyDecryptor};
use crate::infrastructure::storage::{ObjectStore, StorageError};
use crate::infrastructure::transcoder::{
    JobRecord, JobRequest, NewPipeline, PipelineChanges, PipelinePage, PipelineRef,
    PipelineSummary, Transcoder, TranscoderError,
};
use crate::state::AppState;
use async_trait::async_trait;
use axum::extract::{Multipart, Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use bytes::Bytes;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const PIPELINE_ID: &str = "1532349581389-ms8sbr";
pub const PIPELINE_ARN: &str =
    "arn:aws:elastictranscoder:eu-west-1:034029384242:pipeline/1532349581389-ms8sbr";
pub const USER_ID: &str = "test-user-id";
pub const AUTH_TOKEN: &str = "test-auth-token";

/// Binds `router` to an ephemeral local port and returns its base URL.
pub async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test server");
    });
    format!("http://{}", addr)
}

#[derive(Clone, Debug, PartialEq)]
pub enum TranscoderCall {
    ListPipelines(Option<String>),
    ReadPipeline(String),
    CreatePipeline(NewPipeline),
    UpdatePipeline(String, PipelineChanges),
    DeletePipeline(String),
    CreateJob(JobRequest),
}

impl TranscoderCall {
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            TranscoderCall::CreatePipeline(_)
                | TranscoderCall::UpdatePipeline(..)
                | TranscoderCall::DeletePipeline(_)
        )
    }
}

/// Records every call. Listing pages are addressed by their index, rendered
/// as the page token.
pub struct FakeTranscoder {
    pages: Vec<Vec<PipelineSummary>>,
    existing: Option<PipelineRef>,
    missing_on_delete: bool,
    failing_create: bool,
    calls: Mutex<Vec<TranscoderCall>>,
}

impl FakeTranscoder {
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            existing: None,
            missing_on_delete: false,
            failing_create: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_page(mut self, pipelines: &[(&str, &str)]) -> Self {
        self.pages.push(
            pipelines
                .iter()
                .map(|(name, id)| PipelineSummary {
                    id: id.to_string(),
                    name: name.to_string(),
                })
                .collect(),
        );
        self
    }

    pub fn with_existing(mut self, id: &str, arn: &str) -> Self {
        self.existing = Some(PipelineRef {
            id: id.to_string(),
            arn: arn.to_string(),
        });
        self
    }

    pub fn with_missing_on_delete(mut self) -> Self {
        self.missing_on_delete = true;
        self
    }

    pub fn with_failing_create(mut self) -> Self {
        self.failing_create = true;
        self
    }

    pub fn calls(&self) -> Vec<TranscoderCall> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub fn mutations(&self) -> Vec<TranscoderCall> {
        self.calls().into_iter().filter(TranscoderCall::is_mutation).collect()
    }

    pub fn jobs(&self) -> Vec<JobRequest> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                TranscoderCall::CreateJob(job) => Some(job),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: TranscoderCall) {
        self.calls.lock().expect("calls lock").push(call);
    }
}

#[async_trait]
impl Transcoder for FakeTranscoder {
    async fn list_pipelines(
        &self,
        page_token: Option<String>,
    ) -> Result<PipelinePage, TranscoderError> {
        self.record(TranscoderCall::ListPipelines(page_token.clone()));
        let index = page_token
            .as_deref()
            .map(|t| t.parse::<usize>().expect("numeric page token"))
            .unwrap_or(0);
        let next_page_token = (index + 1 < self.pages.len()).then(|| (index + 1).to_string());
        Ok(PipelinePage {
            pipelines: self.pages.get(index).cloned().unwrap_or_default(),
            next_page_token,
        })
    }

    async fn read_pipeline(&self, id: &str) -> Result<PipelineRef, TranscoderError> {
        self.record(TranscoderCall::ReadPipeline(id.to_string()));
        self.existing
            .clone()
            .ok_or_else(|| TranscoderError::NotFound(id.to_string()))
    }

    async fn create_pipeline(&self, pipeline: &NewPipeline) -> Result<PipelineRef, TranscoderError> {
        self.record(TranscoderCall::CreatePipeline(pipeline.clone()));
        if self.failing_create {
            return Err(TranscoderError::Service("Role is not a valid IAM role".to_string()));
        }
        Ok(PipelineRef {
            id: PIPELINE_ID.to_string(),
            arn: PIPELINE_ARN.to_string(),
        })
    }

    async fn update_pipeline(
        &self,
        id: &str,
        changes: &PipelineChanges,
    ) -> Result<PipelineRef, TranscoderError> {
        self.record(TranscoderCall::UpdatePipeline(id.to_string(), changes.clone()));
        // The update response deliberately differs from the read response.
        Ok(PipelineRef {
            id: format!("{}-updated", id),
            arn: "arn:updated".to_string(),
        })
    }

    async fn delete_pipeline(&self, id: &str) -> Result<(), TranscoderError> {
        self.record(TranscoderCall::DeletePipeline(id.to_string()));
        if self.missing_on_delete {
            return Err(TranscoderError::NotFound(id.to_string()));
        }
        Ok(())
    }

    async fn create_job(&self, job: &JobRequest) -> Result<JobRecord, TranscoderError> {
        self.record(TranscoderCall::CreateJob(job.clone()));
        Ok(JobRecord {
            id: format!("job-{}", self.jobs().len()),
            status: Some("Submitted".to_string()),
        })
    }
}

#[derive(Default)]
pub struct FakeStore {
    objects: HashMap<(String, String), Bytes>,
    fetched: Mutex<Vec<(String, String)>>,
}

impl FakeStore {
    pub fn with_object(mut self, bucket: &str, key: &str, body: &'static [u8]) -> Self {
        self.objects
            .insert((bucket.to_string(), key.to_string()), Bytes::from_static(body));
        self
    }

    pub fn fetched(&self) -> Vec<(String, String)> {
        self.fetched.lock().expect("fetched lock").clone()
    }
}

#[async_trait]
impl ObjectStore for FakeStore {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Bytes, StorageError> {
        self.fetched
            .lock()
            .expect("fetched lock")
            .push((bucket.to_string(), key.to_string()));
        self.objects
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
            .ok_or_else(|| StorageError::Fetch {
                bucket: bucket.to_string(),
                key: key.to_string(),
                message: "NoSuchKey".to_string(),
            })
    }
}

/// "Decrypts" by appending `-decrypted` to the ciphertext.
#[derive(Default)]
pub struct FakeKms {
    calls: AtomicUsize,
}

impl FakeKms {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl KeyDecryptor for FakeKms {
    async fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, DecryptError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut plaintext = ciphertext.to_vec();
        plaintext.extend_from_slice(b"-decrypted");
        Ok(plaintext)
    }
}

#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub user_id: Option<String>,
    pub auth_token: Option<String>,
}

#[derive(Clone, Debug)]
pub struct RecordedUpload {
    pub room_id: String,
    pub field: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
    pub user_id: Option<String>,
}

#[derive(Default)]
struct ChatLog {
    login_bodies: Vec<Value>,
    login_headers: Vec<(Option<String>, Option<String>)>,
    requests: Vec<RecordedRequest>,
    uploads: Vec<RecordedUpload>,
}

/// A chat server accepting a single username/password pair.
#[derive(Clone)]
pub struct FakeChat {
    username: String,
    password: String,
    logins: Arc<AtomicUsize>,
    log: Arc<Mutex<ChatLog>>,
}

fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

impl FakeChat {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            logins: Arc::new(AtomicUsize::new(0)),
            log: Arc::new(Mutex::new(ChatLog::default())),
        }
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/api/v1/login", post(Self::login))
            .route("/api/v1/info", get(Self::info))
            .route("/api/v1/rooms.upload/{room_id}", post(Self::upload))
            .with_state(self.clone())
    }

    pub fn login_count(&self) -> usize {
        self.logins.load(Ordering::SeqCst)
    }

    pub fn login_bodies(&self) -> Vec<Value> {
        self.log.lock().expect("chat log").login_bodies.clone()
    }

    pub fn login_headers(&self) -> Vec<(Option<String>, Option<String>)> {
        self.log.lock().expect("chat log").login_headers.clone()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.log.lock().expect("chat log").requests.clone()
    }

    pub fn uploads(&self) -> Vec<RecordedUpload> {
        self.log.lock().expect("chat log").uploads.clone()
    }

    async fn login(
        State(chat): State<FakeChat>,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> impl IntoResponse {
        chat.logins.fetch_add(1, Ordering::SeqCst);
        {
            let mut log = chat.log.lock().expect("chat log");
            log.login_bodies.push(body.clone());
            log.login_headers
                .push((header(&headers, "x-user-id"), header(&headers, "x-auth-token")));
        }

        if body["username"] != chat.username.as_str() || body["password"] != chat.password.as_str() {
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "status": "error", "error": "Unauthorized" })),
            );
        }

        (
            StatusCode::OK,
            Json(json!({
                "status": "success",
                "data": { "userId": USER_ID, "authToken": AUTH_TOKEN }
            })),
        )
    }

    async fn info(State(chat): State<FakeChat>, headers: HeaderMap) -> Json<Value> {
        chat.log.lock().expect("chat log").requests.push(RecordedRequest {
            user_id: header(&headers, "x-user-id"),
            auth_token: header(&headers, "x-auth-token"),
        });
        Json(json!({ "success": true }))
    }

    async fn upload(
        State(chat): State<FakeChat>,
        Path(room_id): Path<String>,
        headers: HeaderMap,
        mut multipart: Multipart,
    ) -> Json<Value> {
        while let Some(field) = multipart.next_field().await.expect("multipart field") {
            let name = field.name().unwrap_or_default().to_string();
            let file_name = field.file_name().map(str::to_string);
            let content_type = field.content_type().map(str::to_string);
            let body = field.bytes().await.expect("field bytes").to_vec();
            chat.log.lock().expect("chat log").uploads.push(RecordedUpload {
                room_id: room_id.clone(),
                field: name,
                file_name,
                content_type,
                body,
                user_id: header(&headers, "x-user-id"),
            });
        }
        Json(json!({ "success": true }))
    }
}

#[derive(Clone, Debug)]
pub struct RecordedCallback {
    pub content_type: Option<String>,
    pub content_length: Option<String>,
    pub body: String,
}

/// Captures PUTs made to the provisioning response URL.
#[derive(Clone, Default)]
pub struct FakeCallback {
    received: Arc<Mutex<Vec<RecordedCallback>>>,
}

impl FakeCallback {
    pub fn router(&self) -> Router {
        Router::new()
            .route("/callback", put(Self::receive))
            .with_state(self.clone())
    }

    pub fn received(&self) -> Vec<RecordedCallback> {
        self.received.lock().expect("callback log").clone()
    }

    async fn receive(State(callback): State<FakeCallback>, headers: HeaderMap, body: String) {
        callback
            .received
            .lock()
            .expect("callback log")
            .push(RecordedCallback {
                content_type: header(&headers, "content-type"),
                content_length: header(&headers, "content-length"),
                body,
            });
    }
}

pub fn chat_config(server_url: &str) -> ChatConfig {
    ChatConfig {
        username: "test/username".to_string(),
        // base64("test/password")
        encrypted_password: "dGVzdC9wYXNzd29yZA==".to_string(),
        server_url: server_url.to_string(),
        room_id: "test/room-id".to_string(),
        artifact_bucket: "test-output-bucket".to_string(),
    }
}

pub fn test_config(chat: Option<ChatConfig>) -> AppConfig {
    AppConfig {
        server_port: 0,
        max_body_bytes: 1024 * 1024,
        stack_name: Some("cynnig".to_string()),
        chat: chat.ok_or(crate::config::settings::ConfigError::Missing("ROCKET_USERNAME")),
        log_stream_name: "log_stream_name".to_string(),
        s3_endpoint: None,
    }
}

pub fn test_state(
    config: AppConfig,
    transcoder: Arc<FakeTranscoder>,
    storage: Arc<FakeStore>,
    kms: Arc<FakeKms>,
) -> AppState {
    AppState::new(config, transcoder, storage, kms, reqwest::Client::new())
}
