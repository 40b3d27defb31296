use utoipa::OpenApi;
use crate::modules::delivery::dto::*;
use crate::modules::motion::dto::*;
use crate::modules::pipeline::model::{PipelineData, PipelineProperties};
use crate::modules::provisioning::dto::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::motion::handler::new_motion_video,
        crate::modules::delivery::handler::new_motion_gifs,
        crate::modules::provisioning::handler::pipeline_resource,
    ),
    components(
        schemas(
            S3Event, S3EventRecord, S3Entity, S3Object, S3Bucket, ScheduledJob,
            SnsEvent, SnsEventRecord, SnsMessage, JobState, DeliveryReport,
            RequestType, CustomResourceRequest, ResponseStatus, CustomResourceResponse,
            PipelineProperties, PipelineData,
        )
    ),
    tags(
        (name = "Events", description = "Motion recording and transcoding job events"),
        (name = "Provisioning", description = "Transcoding pipeline custom resource")
    )
)]
pub struct ApiDoc;
