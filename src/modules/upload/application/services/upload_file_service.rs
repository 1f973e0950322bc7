use async_trait::async_trait;
use tracing::{error, info};

use crate::upload::application::{
    domain::intake_guard::{classify, generate_unique_name},
    ports::{
        incoming::use_cases::{
            object_key, UploadFileCommand, UploadFileError, UploadFileUseCase, UploadedFile,
        },
        outgoing::{BlobStorage, StoredObject},
    },
};

#[derive(Debug, Clone)]
pub struct UploadFileService<S>
where
    S: BlobStorage + Send + Sync,
{
    storage: S,
}

impl<S> UploadFileService<S>
where
    S: BlobStorage + Send + Sync,
{
    pub fn new(storage: S) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl<S> UploadFileUseCase for UploadFileService<S>
where
    S: BlobStorage + Send + Sync,
{
    async fn execute(&self, command: UploadFileCommand) -> Result<UploadedFile, UploadFileError> {
        let stored_name = generate_unique_name(command.original_name());
        let category = classify(command.content_type());
        let key = object_key(category, &stored_name);

        let original_name = command.original_name().to_string();
        let content_type = command.content_type().to_string();
        let size_bytes = command.size_bytes();

        self.storage
            .put_object(StoredObject {
                key: key.clone(),
                content_type: content_type.clone(),
                bytes: command.into_bytes(),
            })
            .await
            .map_err(|e| {
                error!(key = %key, error = %e, "Failed to store upload");
                UploadFileError::StorageError(e.to_string())
            })?;

        info!(
            key = %key,
            category = %category,
            size_bytes,
            "Stored upload"
        );

        Ok(UploadedFile {
            stored_name: stored_name.into_inner(),
            object_key: key,
            category,
            content_type,
            size_bytes,
            original_name,
        })
    }
}
