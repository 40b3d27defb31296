use async_trait::async_trait;
use thiserror::Error;

pub mod elastic;

#[derive(Debug, Error)]
pub enum TranscoderError {
    #[error("transcoder resource not found: {0}")]
    NotFound(String),

    #[error("transcoder request failed: {0}")]
    Service(String),

    #[error("transcoder response is missing {0}")]
    MissingField(&'static str),
}

impl TranscoderError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, TranscoderError::NotFound(_))
    }
}

/// The four event categories all point at the same topic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotificationTopics {
    pub progressing: String,
    pub completed: String,
    pub warning: String,
    pub error: String,
}

impl NotificationTopics {
    pub fn all(topic: &str) -> Self {
        Self {
            progressing: topic.to_string(),
            completed: topic.to_string(),
            warning: topic.to_string(),
            error: topic.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelineSummary {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelineRef {
    pub id: String,
    pub arn: String,
}

#[derive(Clone, Debug, Default)]
pub struct PipelinePage {
    pub pipelines: Vec<PipelineSummary>,
    pub next_page_token: Option<String>,
}

/// Arguments of a create-pipeline call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewPipeline {
    pub name: String,
    pub input_bucket: String,
    pub output_bucket: String,
    pub role: String,
    pub notifications: NotificationTopics,
}

/// Arguments of an update-pipeline call. The service takes the output
/// location as separate content and thumbnail configurations here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelineChanges {
    pub name: String,
    pub input_bucket: String,
    pub role: String,
    pub notifications: NotificationTopics,
    pub content_bucket: String,
    pub thumbnail_bucket: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobRequest {
    pub pipeline_id: String,
    pub input_key: String,
    pub output_key: String,
    pub preset_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobRecord {
    pub id: String,
    pub status: Option<String>,
}

#[async_trait]
pub trait Transcoder: Send + Sync {
    async fn list_pipelines(&self, page_token: Option<String>)
    -> Result<PipelinePage, TranscoderError>;

    async fn read_pipeline(&self, id: &str) -> Result<PipelineRef, TranscoderError>;

    async fn create_pipeline(&self, pipeline: &NewPipeline) -> Result<PipelineRef, TranscoderError>;

    async fn update_pipeline(
        &self,
        id: &str,
        changes: &PipelineChanges,
    ) -> Result<PipelineRef, TranscoderError>;

    async fn delete_pipeline(&self, id: &str) -> Result<(), TranscoderError>;

    async fn create_job(&self, job: &JobRequest) -> Result<JobRecord, TranscoderError>;
}
