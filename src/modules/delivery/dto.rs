use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Messaging notification delivered to the handler.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct SnsEvent {
    #[serde(rename = "Records")]
    pub records: Vec<SnsEventRecord>,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct SnsEventRecord {
    #[serde(rename = "Sns")]
    pub sns: SnsMessage,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct SnsMessage {
    /// JSON document published by the transcoder, see [`JobStatusNotification`].
    #[serde(rename = "Message")]
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum JobState {
    Progressing,
    Completed,
    Warning,
    Error,
}

/// Job status published by the transcoder on the notification topic.
#[derive(Debug, Deserialize, Serialize)]
pub struct JobStatusNotification {
    pub state: JobState,
    #[serde(rename = "jobId", default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(default)]
    pub outputs: Vec<JobOutputStatus>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct JobOutputStatus {
    pub key: String,
    #[serde(rename = "presetId", default)]
    pub preset_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeliveryReport {
    pub state: JobState,
    pub job_id: Option<String>,
    /// Keys uploaded to the chat room, in order.
    pub uploaded: Vec<String>,
}
