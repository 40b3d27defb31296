use super::callback;
use super::dto::{CustomResourceRequest, CustomResourceResponse, PipelineAction, ResponseStatus};
use crate::common::error::AppError;
use crate::infrastructure::transcoder::Transcoder;
use crate::modules::pipeline::model::PipelineData;
use crate::modules::pipeline::service::PipelineService;
use crate::state::AppState;
use tracing::{error, info};

struct Outcome {
    physical_id: String,
    data: Option<PipelineData>,
}

pub struct ProvisioningService;

impl ProvisioningService {
    /// Applies the request and reports the outcome to its response URL.
    /// A failed operation is reported as FAILED; only a failed report fails
    /// the invocation.
    pub async fn handle(
        state: &AppState,
        request: CustomResourceRequest,
    ) -> Result<CustomResourceResponse, AppError> {
        info!(
            "{:?} request {} for {} ({})",
            request.request_type, request.request_id, request.logical_resource_id, request.resource_type
        );

        let log_stream = &state.config.log_stream_name;
        let response = match Self::apply(state.transcoder.as_ref(), &request).await {
            Ok(outcome) => CustomResourceResponse {
                status: ResponseStatus::Success,
                reason: format!("See details in CloudWatch Log Stream: {}", log_stream),
                physical_resource_id: outcome.physical_id,
                stack_id: request.stack_id.clone(),
                request_id: request.request_id.clone(),
                logical_resource_id: request.logical_resource_id.clone(),
                data: outcome.data,
            },
            Err(e) => {
                error!("❌ {:?} of {} failed: {}", request.request_type, request.logical_resource_id, e);
                CustomResourceResponse {
                    status: ResponseStatus::Failed,
                    reason: e.to_string(),
                    physical_resource_id: request
                        .physical_resource_id
                        .clone()
                        .unwrap_or_else(|| log_stream.clone()),
                    stack_id: request.stack_id.clone(),
                    request_id: request.request_id.clone(),
                    logical_resource_id: request.logical_resource_id.clone(),
                    data: None,
                }
            }
        };

        callback::send_response(&state.http, &request.response_url, &response).await?;
        Ok(response)
    }

    async fn apply(
        transcoder: &dyn Transcoder,
        request: &CustomResourceRequest,
    ) -> Result<Outcome, AppError> {
        let action = request
            .action()
            .map_err(|e| AppError::InvalidPayload(e.to_string()))?;

        let outcome = match action {
            PipelineAction::Create { properties } => {
                let provisioned = PipelineService::create(transcoder, &properties).await?;
                Outcome {
                    physical_id: provisioned.physical_id,
                    data: Some(provisioned.data),
                }
            }
            PipelineAction::Update {
                physical_id,
                properties,
                old_properties,
            } => {
                let provisioned =
                    PipelineService::update(transcoder, physical_id, &properties, &old_properties)
                        .await?;
                Outcome {
                    physical_id: provisioned.physical_id,
                    data: Some(provisioned.data),
                }
            }
            PipelineAction::Delete { physical_id } => {
                PipelineService::delete(transcoder, physical_id).await?;
                Outcome {
                    physical_id: physical_id.to_string(),
                    data: None,
                }
            }
        };

        Ok(outcome)
    }
}
