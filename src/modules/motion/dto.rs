use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Object-store notification about new or updated objects.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct S3Event {
    #[serde(rename = "Records")]
    pub records: Vec<S3EventRecord>,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct S3EventRecord {
    pub s3: S3Entity,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct S3Entity {
    pub object: S3Object,
    pub bucket: S3Bucket,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct S3Object {
    pub key: String,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct S3Bucket {
    pub arn: String,
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ScheduledJob {
    pub job_id: String,
    pub pipeline_id: String,
    pub input_key: String,
    pub output_key: String,
}
