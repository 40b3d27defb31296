pub mod chat;
pub mod kms;
pub mod storage;
pub mod transcoder;
