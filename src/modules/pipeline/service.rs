use super::model::{PipelineData, PipelineProperties, ProvisionedPipeline};
use crate::common::error::AppError;
use crate::infrastructure::transcoder::{Transcoder, TranscoderError};
use tracing::{debug, info};

/// Create/update/delete of the transcoding pipeline, with upsert semantics
/// for repeated provisioning requests.
pub struct PipelineService;

impl PipelineService {
    pub async fn create(
        transcoder: &dyn Transcoder,
        properties: &PipelineProperties,
    ) -> Result<ProvisionedPipeline, TranscoderError> {
        let pipeline = transcoder
            .create_pipeline(&properties.to_new_pipeline())
            .await?;

        info!("✅ Created pipeline {} ({})", pipeline.id, properties.display_name);

        Ok(ProvisionedPipeline {
            physical_id: pipeline.id.clone(),
            data: pipeline.into(),
        })
    }

    /// Reads the pipeline first: a missing pipeline is created instead, and
    /// unchanged properties leave it untouched.
    pub async fn update(
        transcoder: &dyn Transcoder,
        physical_id: &str,
        properties: &PipelineProperties,
        old_properties: &PipelineProperties,
    ) -> Result<ProvisionedPipeline, TranscoderError> {
        let existing = match transcoder.read_pipeline(physical_id).await {
            Ok(pipeline) => pipeline,
            Err(e) if e.is_not_found() => {
                debug!("resource {} not found", physical_id);
                return Self::create(transcoder, properties).await;
            }
            Err(e) => return Err(e),
        };

        let data = PipelineData::from(existing.clone());
        let provisioned = ProvisionedPipeline {
            physical_id: physical_id.to_string(),
            data,
        };

        if properties == old_properties {
            debug!("pipeline {} unchanged, skipping update", physical_id);
            return Ok(provisioned);
        }

        transcoder
            .update_pipeline(&existing.id, &properties.to_changes())
            .await?;

        info!("✅ Updated pipeline {}", existing.id);
        Ok(provisioned)
    }

    /// Deleting a pipeline that no longer exists succeeds.
    pub async fn delete(transcoder: &dyn Transcoder, physical_id: &str) -> Result<(), TranscoderError> {
        match transcoder.delete_pipeline(physical_id).await {
            Ok(()) => {
                info!("🗑️ Deleted pipeline {}", physical_id);
                Ok(())
            }
            Err(e) if e.is_not_found() => {
                debug!("resource {} not found", physical_id);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Returns the id of the first pipeline whose name contains `hint`,
    /// walking the listing page by page.
    pub async fn find_id_by_name(transcoder: &dyn Transcoder, hint: &str) -> Result<String, AppError> {
        let mut page_token = None;

        loop {
            let page = transcoder.list_pipelines(page_token).await?;

            if let Some(pipeline) = page.pipelines.into_iter().find(|p| p.name.contains(hint)) {
                debug!("pipeline '{}' matches '{}'", pipeline.name, hint);
                return Ok(pipeline.id);
            }

            match page.next_page_token {
                Some(token) => page_token = Some(token),
                None => return Err(AppError::PipelineNotFound(hint.to_string())),
            }
        }
    }
}
