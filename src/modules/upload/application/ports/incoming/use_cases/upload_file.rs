use async_trait::async_trait;
use bytes::Bytes;
use serde::Serialize;
use utoipa::ToSchema;

use crate::upload::application::domain::{
    entities::{FileCategory, StoredFileName, UploadCandidate},
    intake_guard::{validate_type, UnsupportedMediaType},
    policies::upload_policy::UploadPolicy,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadFileCommandError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error(transparent)]
    UnsupportedMediaType(#[from] UnsupportedMediaType),

    #[error("File too large (max {max_bytes} bytes, got {actual_bytes} bytes)")]
    FileTooLarge { max_bytes: u64, actual_bytes: u64 },
}

/// Storage key strategy: `<category>/<stored name>` (no user-controlled path segments).
pub fn object_key(category: FileCategory, stored_name: &StoredFileName) -> String {
    format!("{}/{}", category, stored_name)
}

#[derive(Debug, Clone)]
pub struct UploadFileCommand {
    original_name: String,
    content_type: String,
    bytes: Bytes,
}

impl UploadFileCommand {
    pub fn builder() -> UploadFileCommandBuilder {
        UploadFileCommandBuilder::default()
    }

    pub fn original_name(&self) -> &str {
        &self.original_name
    }
    pub fn content_type(&self) -> &str {
        &self.content_type
    }
    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }
    pub fn size_bytes(&self) -> u64 {
        self.bytes.len() as u64
    }
    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }
}

#[derive(Default)]
pub struct UploadFileCommandBuilder {
    file_name: Option<String>,
    content_type: Option<String>,
    bytes: Option<Bytes>,
}

impl UploadFileCommandBuilder {
    pub fn candidate(mut self, candidate: UploadCandidate) -> Self {
        self.file_name = Some(candidate.original_filename);
        self.content_type = candidate.declared_content_type;
        self
    }

    pub fn file_name(mut self, file_name: String) -> Self {
        self.file_name = Some(file_name);
        self
    }

    pub fn content_type(mut self, content_type: Option<String>) -> Self {
        self.content_type = content_type;
        self
    }

    pub fn bytes(mut self, bytes: Bytes) -> Self {
        self.bytes = Some(bytes);
        self
    }

    /// Build a validated command using the injected policy.
    pub fn build(self, policy: &UploadPolicy) -> Result<UploadFileCommand, UploadFileCommandError> {
        let file_name = self
            .file_name
            .ok_or(UploadFileCommandError::MissingField("file_name"))?;
        let bytes = self
            .bytes
            .ok_or(UploadFileCommandError::MissingField("bytes"))?;

        validate_type(self.content_type.as_deref(), &policy.allow_list)?;
        // validate_type only passes when a type is present
        let content_type = self.content_type.unwrap_or_default();

        let actual_bytes = bytes.len() as u64;
        if actual_bytes > policy.max_file_size_bytes {
            return Err(UploadFileCommandError::FileTooLarge {
                max_bytes: policy.max_file_size_bytes,
                actual_bytes,
            });
        }

        Ok(UploadFileCommand {
            original_name: file_name,
            content_type,
            bytes,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    #[schema(example = "3f2c1a9e-6a1b-4c1e-9d35-0c8f7e4b2a11.mp4")]
    pub stored_name: String,
    #[schema(example = "video/3f2c1a9e-6a1b-4c1e-9d35-0c8f7e4b2a11.mp4")]
    pub object_key: String,
    pub category: FileCategory,
    #[schema(example = "video/mp4")]
    pub content_type: String,
    pub size_bytes: u64,
    #[schema(example = "grandma-birthday.mp4")]
    pub original_name: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UploadFileError {
    #[error("Storage service error: {0}")]
    StorageError(String),
}

#[async_trait]
pub trait UploadFileUseCase: Send + Sync {
    async fn execute(&self, command: UploadFileCommand) -> Result<UploadedFile, UploadFileError>;
}
