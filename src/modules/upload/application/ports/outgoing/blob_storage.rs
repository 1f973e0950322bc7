use async_trait::async_trait;
use bytes::Bytes;

// ============================================================================
// Domain Types
// ============================================================================

/// An object ready to be written to the blob store.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredObject {
    pub key: String,
    pub content_type: String,
    pub bytes: Bytes,
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum BlobStorageError {
    #[error("Access denied")]
    AccessDenied,

    #[error("Bucket not found")]
    BucketNotFound,

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

// ============================================================================
// Port Interface
// ============================================================================

/// Port for the blob store that keeps uploaded files.
///
/// The bucket itself is provisioned outside this service.
#[async_trait]
pub trait BlobStorage: Send + Sync {
    /// Writes `object` under its key, replacing anything already there.
    async fn put_object(&self, object: StoredObject) -> Result<(), BlobStorageError>;

    /// Cheap reachability check used by the readiness probe.
    async fn ping(&self) -> Result<(), BlobStorageError>;
}
