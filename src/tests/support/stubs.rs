use async_trait::async_trait;

use crate::upload::application::ports::incoming::use_cases::{
    UploadFileCommand, UploadFileError, UploadFileUseCase, UploadedFile,
};
use crate::upload::application::ports::outgoing::{BlobStorage, BlobStorageError, StoredObject};
use crate::user::application::domain::entities::User;
use crate::user::application::ports::incoming::use_cases::{FetchUserError, FetchUserUseCase};

// ---------- Upload ----------

#[derive(Clone)]
pub struct StubUploadFileUseCase;

#[async_trait]
impl UploadFileUseCase for StubUploadFileUseCase {
    async fn execute(&self, _command: UploadFileCommand) -> Result<UploadedFile, UploadFileError> {
        Err(UploadFileError::StorageError(
            "not used in this test".to_string(),
        ))
    }
}

/// Blob store double whose only behaviour is whether `ping` succeeds.
#[derive(Clone)]
pub struct StubBlobStorage {
    reachable: bool,
}

impl StubBlobStorage {
    pub fn reachable() -> Self {
        Self { reachable: true }
    }

    pub fn unreachable() -> Self {
        Self { reachable: false }
    }

    fn status(&self) -> Result<(), BlobStorageError> {
        if self.reachable {
            Ok(())
        } else {
            Err(BlobStorageError::Unavailable("connection refused".to_string()))
        }
    }
}

#[async_trait]
impl BlobStorage for StubBlobStorage {
    async fn put_object(&self, _object: StoredObject) -> Result<(), BlobStorageError> {
        self.status()
    }

    async fn ping(&self) -> Result<(), BlobStorageError> {
        self.status()
    }
}

// ---------- User ----------

#[derive(Clone)]
pub struct StubFetchUserUseCase;

#[async_trait]
impl FetchUserUseCase for StubFetchUserUseCase {
    async fn execute(&self, username: &str) -> Result<User, FetchUserError> {
        Err(FetchUserError::UserNotFound(username.to_string()))
    }
}
