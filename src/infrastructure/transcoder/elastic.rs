use super::{
    JobRecord, JobRequest, NewPipeline, NotificationTopics, PipelineChanges, PipelinePage,
    PipelineRef, PipelineSummary, Transcoder, TranscoderError,
};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_elastictranscoder::types::{
    CreateJobOutput as JobOutputSettings, JobInput, Notifications, Pipeline, PipelineOutputConfig,
};
use aws_sdk_elastictranscoder::{Client, Error as SdkServiceError};
use tracing::{debug, info};

/// Elastic Transcoder backed implementation of [`Transcoder`].
#[derive(Clone)]
pub struct ElasticTranscoderService {
    client: Client,
}

impl ElasticTranscoderService {
    pub fn new(sdk_config: &SdkConfig) -> Self {
        info!("✅ Elastic Transcoder client ready");
        Self {
            client: Client::new(sdk_config),
        }
    }
}

fn sdk_err<E>(err: E) -> TranscoderError
where
    SdkServiceError: From<E>,
{
    TranscoderError::Service(SdkServiceError::from(err).to_string())
}

fn not_found_or<E>(err: E, id: &str) -> TranscoderError
where
    SdkServiceError: From<E>,
{
    match SdkServiceError::from(err) {
        SdkServiceError::ResourceNotFoundException(_) => TranscoderError::NotFound(id.to_string()),
        other => TranscoderError::Service(other.to_string()),
    }
}

fn notifications(topics: &NotificationTopics) -> Notifications {
    Notifications::builder()
        .progressing(&topics.progressing)
        .completed(&topics.completed)
        .warning(&topics.warning)
        .error(&topics.error)
        .build()
}

fn output_config(bucket: &str) -> PipelineOutputConfig {
    PipelineOutputConfig::builder().bucket(bucket).build()
}

fn pipeline_ref(pipeline: Option<Pipeline>) -> Result<PipelineRef, TranscoderError> {
    let pipeline = pipeline.ok_or(TranscoderError::MissingField("Pipeline"))?;
    Ok(PipelineRef {
        id: pipeline.id.ok_or(TranscoderError::MissingField("Pipeline.Id"))?,
        arn: pipeline.arn.ok_or(TranscoderError::MissingField("Pipeline.Arn"))?,
    })
}

#[async_trait]
impl Transcoder for ElasticTranscoderService {
    async fn list_pipelines(
        &self,
        page_token: Option<String>,
    ) -> Result<PipelinePage, TranscoderError> {
        let output = self
            .client
            .list_pipelines()
            .set_page_token(page_token)
            .send()
            .await
            .map_err(sdk_err)?;

        let pipelines = output
            .pipelines
            .unwrap_or_default()
            .into_iter()
            .filter_map(|p| match (p.id, p.name) {
                (Some(id), Some(name)) => Some(PipelineSummary { id, name }),
                _ => None,
            })
            .collect::<Vec<_>>();

        debug!("listed {} pipelines", pipelines.len());

        Ok(PipelinePage {
            pipelines,
            next_page_token: output.next_page_token,
        })
    }

    async fn read_pipeline(&self, id: &str) -> Result<PipelineRef, TranscoderError> {
        let output = self
            .client
            .read_pipeline()
            .id(id)
            .send()
            .await
            .map_err(|e| not_found_or(e, id))?;

        pipeline_ref(output.pipeline)
    }

    async fn create_pipeline(&self, pipeline: &NewPipeline) -> Result<PipelineRef, TranscoderError> {
        let output = self
            .client
            .create_pipeline()
            .name(&pipeline.name)
            .input_bucket(&pipeline.input_bucket)
            .output_bucket(&pipeline.output_bucket)
            .role(&pipeline.role)
            .notifications(notifications(&pipeline.notifications))
            .send()
            .await
            .map_err(sdk_err)?;

        pipeline_ref(output.pipeline)
    }

    async fn update_pipeline(
        &self,
        id: &str,
        changes: &PipelineChanges,
    ) -> Result<PipelineRef, TranscoderError> {
        let output = self
            .client
            .update_pipeline()
            .id(id)
            .name(&changes.name)
            .input_bucket(&changes.input_bucket)
            .role(&changes.role)
            .notifications(notifications(&changes.notifications))
            .content_config(output_config(&changes.content_bucket))
            .thumbnail_config(output_config(&changes.thumbnail_bucket))
            .send()
            .await
            .map_err(|e| not_found_or(e, id))?;

        pipeline_ref(output.pipeline)
    }

    async fn delete_pipeline(&self, id: &str) -> Result<(), TranscoderError> {
        self.client
            .delete_pipeline()
            .id(id)
            .send()
            .await
            .map_err(|e| not_found_or(e, id))?;

        Ok(())
    }

    async fn create_job(&self, job: &JobRequest) -> Result<JobRecord, TranscoderError> {
        let output = self
            .client
            .create_job()
            .pipeline_id(&job.pipeline_id)
            .input(JobInput::builder().key(&job.input_key).build())
            .output(
                JobOutputSettings::builder()
                    .key(&job.output_key)
                    .preset_id(&job.preset_id)
                    .build(),
            )
            .send()
            .await
            .map_err(sdk_err)?;

        let created = output.job.ok_or(TranscoderError::MissingField("Job"))?;
        Ok(JobRecord {
            id: created.id.ok_or(TranscoderError::MissingField("Job.Id"))?,
            status: created.status,
        })
    }
}
