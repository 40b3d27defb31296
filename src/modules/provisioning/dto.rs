use crate::modules::pipeline::model::{PipelineData, PipelineProperties};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub enum RequestType {
    Create,
    Update,
    Delete,
}

/// Custom resource request sent by the provisioning framework.
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct CustomResourceRequest {
    pub request_type: RequestType,
    pub request_id: String,
    /// Pre-signed URL receiving the response document.
    #[serde(rename = "ResponseURL")]
    pub response_url: String,
    pub resource_type: String,
    pub logical_resource_id: String,
    pub stack_id: String,
    /// Decoded by [`CustomResourceRequest::action`], so that a bad property
    /// set is still reported back to the framework.
    #[schema(value_type = Object)]
    pub resource_properties: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical_resource_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub old_resource_properties: Option<Value>,
}

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("{request_type:?} request is missing {field}")]
    MissingField {
        request_type: RequestType,
        field: &'static str,
    },

    #[error("{field} are invalid: {message}")]
    InvalidProperties {
        field: &'static str,
        message: String,
    },
}

/// What a request asks for, with the fields each kind requires.
#[derive(Debug, PartialEq, Eq)]
pub enum PipelineAction<'a> {
    Create {
        properties: PipelineProperties,
    },
    Update {
        physical_id: &'a str,
        properties: PipelineProperties,
        old_properties: PipelineProperties,
    },
    Delete {
        physical_id: &'a str,
    },
}

impl CustomResourceRequest {
    pub fn action(&self) -> Result<PipelineAction<'_>, RequestError> {
        let missing = |field| RequestError::MissingField {
            request_type: self.request_type,
            field,
        };
        let physical_id = || {
            self.physical_resource_id
                .as_deref()
                .ok_or_else(|| missing("PhysicalResourceId"))
        };

        Ok(match self.request_type {
            RequestType::Create => PipelineAction::Create {
                properties: decode("ResourceProperties", &self.resource_properties)?,
            },
            RequestType::Update => {
                let physical_id = physical_id()?;
                let old_properties = self
                    .old_resource_properties
                    .as_ref()
                    .ok_or_else(|| missing("OldResourceProperties"))?;
                PipelineAction::Update {
                    physical_id,
                    properties: decode("ResourceProperties", &self.resource_properties)?,
                    old_properties: decode("OldResourceProperties", old_properties)?,
                }
            }
            RequestType::Delete => PipelineAction::Delete {
                physical_id: physical_id()?,
            },
        })
    }
}

fn decode(field: &'static str, value: &Value) -> Result<PipelineProperties, RequestError> {
    PipelineProperties::deserialize(value).map_err(|e| RequestError::InvalidProperties {
        field,
        message: e.to_string(),
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResponseStatus {
    Success,
    Failed,
}

/// Response document PUT to the request's `ResponseURL`. Field order is
/// the serialized order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct CustomResourceResponse {
    pub status: ResponseStatus,
    pub reason: String,
    pub physical_resource_id: String,
    pub stack_id: String,
    pub request_id: String,
    pub logical_resource_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<PipelineData>,
}
