use super::dto::{S3Event, ScheduledJob};
use crate::common::error::AppError;
use crate::infrastructure::transcoder::{JobRequest, Transcoder, TranscoderError};
use crate::modules::pipeline::service::PipelineService;
use crate::state::AppState;
use tracing::{debug, info};

/// System preset "Gif (Animated)".
pub const GIF_PRESET_ID: &str = "1351620000001-100200";

pub struct MotionService;

impl MotionService {
    /// Submits one GIF job per record, in delivery order. A failure aborts
    /// the remaining records.
    pub async fn schedule_gifs(state: &AppState, event: S3Event) -> Result<Vec<ScheduledJob>, AppError> {
        debug!("EVENT: {:?}", event);

        let stack_name = state.config.stack_name()?;
        let transcoder = state.transcoder.as_ref();
        let pipeline_id = PipelineService::find_id_by_name(transcoder, stack_name).await?;

        let mut scheduled = Vec::with_capacity(event.records.len());
        for record in event.records {
            let job =
                Self::schedule_gif_transcoding(transcoder, &pipeline_id, &record.s3.object.key)
                    .await?;
            info!("🎥 Job {} scheduled: {} -> {}", job.job_id, job.input_key, job.output_key);
            scheduled.push(job);
        }

        Ok(scheduled)
    }

    pub async fn schedule_gif_transcoding(
        transcoder: &dyn Transcoder,
        pipeline_id: &str,
        object_key: &str,
    ) -> Result<ScheduledJob, TranscoderError> {
        let request = JobRequest {
            pipeline_id: pipeline_id.to_string(),
            input_key: object_key.to_string(),
            output_key: gif_output_key(object_key),
            preset_id: GIF_PRESET_ID.to_string(),
        };

        let job = transcoder.create_job(&request).await?;

        Ok(ScheduledJob {
            job_id: job.id,
            pipeline_id: request.pipeline_id,
            input_key: request.input_key,
            output_key: request.output_key,
        })
    }
}

/// Replaces the extension of the key's last path segment with `.gif`, or
/// appends `.gif` when there is none. Leading dots of a segment do not start
/// an extension.
pub fn gif_output_key(object_key: &str) -> String {
    let stem_end = extension_start(object_key).unwrap_or(object_key.len());
    format!("{}.gif", &object_key[..stem_end])
}

fn extension_start(key: &str) -> Option<usize> {
    let name_start = key.rfind('/').map_or(0, |i| i + 1);
    let dot = key.rfind('.')?;
    if dot <= name_start || key[name_start..dot].chars().all(|c| c == '.') {
        return None;
    }
    Some(dot)
}
