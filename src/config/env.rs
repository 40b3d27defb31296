use std::env;
use std::str::FromStr;

pub enum EnvKey {
    ServerPort,
    MaxBodyBytes,
    StackName,
    RocketUsername,
    RocketPassword,
    RocketServer,
    RocketRoomId,
    PipelineBucket,
    LogStreamName,
    S3Endpoint,
}

impl EnvKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvKey::ServerPort => "APP_PORT",
            EnvKey::MaxBodyBytes => "MAX_BODY_BYTES",
            EnvKey::StackName => "STACK_NAME",
            EnvKey::RocketUsername => "ROCKET_USERNAME",
            EnvKey::RocketPassword => "ROCKET_PASSWORD",
            EnvKey::RocketServer => "ROCKET_SERVER",
            EnvKey::RocketRoomId => "ROCKET_ROOM_ID",
            EnvKey::PipelineBucket => "PIPELINE_BUCKET",
            EnvKey::LogStreamName => "AWS_LAMBDA_LOG_STREAM_NAME",
            EnvKey::S3Endpoint => "S3_ENDPOINT",
        }
    }
}

/// Reads a key; empty values count as unset.
pub fn get(key: EnvKey) -> Result<String, env::VarError> {
    match env::var(key.as_str()) {
        Ok(val) if val.trim().is_empty() => Err(env::VarError::NotPresent),
        other => other,
    }
}

pub fn get_or(key: EnvKey, default: &str) -> String {
    get(key).unwrap_or_else(|_| default.to_string())
}

pub fn get_parsed<T: FromStr>(key: EnvKey, default: T) -> T {
    match get(key) {
        Ok(val) => val.parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}
