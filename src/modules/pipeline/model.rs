use crate::infrastructure::transcoder::{NewPipeline, NotificationTopics, PipelineChanges, PipelineRef};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Declared configuration of the pipeline resource, as written in the
/// infrastructure template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct PipelineProperties {
    pub display_name: String,
    pub input_bucket: String,
    pub output_bucket: String,
    /// Execution role ARN.
    pub role: String,
    /// Topic ARN receiving all four job notification categories.
    pub notifications: String,
    /// Added by the provisioning framework to every request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_token: Option<String>,
}

impl PipelineProperties {
    pub fn to_new_pipeline(&self) -> NewPipeline {
        NewPipeline {
            name: self.display_name.clone(),
            input_bucket: self.input_bucket.clone(),
            output_bucket: self.output_bucket.clone(),
            role: self.role.clone(),
            notifications: NotificationTopics::all(&self.notifications),
        }
    }

    pub fn to_changes(&self) -> PipelineChanges {
        PipelineChanges {
            name: self.display_name.clone(),
            input_bucket: self.input_bucket.clone(),
            role: self.role.clone(),
            notifications: NotificationTopics::all(&self.notifications),
            content_bucket: self.output_bucket.clone(),
            thumbnail_bucket: self.output_bucket.clone(),
        }
    }
}

/// Result data reported back to the template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PipelineData {
    #[serde(rename = "Arn")]
    pub arn: String,
    #[serde(rename = "Id")]
    pub id: String,
}

impl From<PipelineRef> for PipelineData {
    fn from(pipeline: PipelineRef) -> Self {
        Self {
            arn: pipeline.arn,
            id: pipeline.id,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProvisionedPipeline {
    pub physical_id: String,
    pub data: PipelineData,
}
