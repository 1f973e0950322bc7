use async_trait::async_trait;
use object_store::aws::AmazonS3Builder;
use object_store::path::Path;
use object_store::{Attribute, Attributes, ObjectStore, PutOptions, PutPayload};
use std::sync::Arc;
use std::time::Instant;

use crate::upload::application::ports::outgoing::{BlobStorage, BlobStorageError, StoredObject};

fn map_store_error(error: object_store::Error) -> BlobStorageError {
    match error {
        object_store::Error::PermissionDenied { .. }
        | object_store::Error::Unauthenticated { .. } => BlobStorageError::AccessDenied,
        object_store::Error::NotFound { .. } => BlobStorageError::BucketNotFound,
        object_store::Error::UnknownConfigurationKey { .. } => {
            BlobStorageError::Configuration(error.to_string())
        }
        other => BlobStorageError::Unavailable(other.to_string()),
    }
}

/// Production adapter: implements the BlobStorage port on top of `object_store`.
#[derive(Clone)]
pub struct ObjectStoreStorage {
    store: Arc<dyn ObjectStore>,
    bucket: String,
}

impl ObjectStoreStorage {
    /// S3 or an S3-compatible service.
    ///
    /// Credentials come from the usual `AWS_*` variables. A custom endpoint
    /// (LocalStack, MinIO) is used path-style; plain HTTP is allowed only when
    /// the endpoint itself is `http://`.
    pub fn s3(
        bucket: &str,
        region: &str,
        endpoint_url: Option<&str>,
    ) -> Result<Self, BlobStorageError> {
        let mut builder = AmazonS3Builder::from_env()
            .with_region(region)
            .with_bucket_name(bucket);

        if let Some(endpoint) = endpoint_url.filter(|e| !e.trim().is_empty()) {
            builder = builder
                .with_endpoint(endpoint)
                .with_allow_http(endpoint.starts_with("http://"));
        }

        let store = builder
            .build()
            .map_err(|e| BlobStorageError::Configuration(e.to_string()))?;

        Ok(Self::with_store(Arc::new(store), bucket))
    }

    pub fn with_store(store: Arc<dyn ObjectStore>, bucket: &str) -> Self {
        Self {
            store,
            bucket: bucket.to_string(),
        }
    }
}

#[async_trait]
impl BlobStorage for ObjectStoreStorage {
    async fn put_object(&self, object: StoredObject) -> Result<(), BlobStorageError> {
        let location = Path::from(object.key.as_str());
        let size = object.bytes.len();

        let mut attributes = Attributes::new();
        attributes.insert(Attribute::ContentType, object.content_type.into());
        let opts = PutOptions {
            attributes,
            ..Default::default()
        };

        let start = Instant::now();
        self.store
            .put_opts(&location, PutPayload::from(object.bytes), opts)
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %self.bucket,
                    key = %object.key,
                    size_bytes = size,
                    "Object upload failed"
                );
                map_store_error(e)
            })?;

        tracing::debug!(
            bucket = %self.bucket,
            key = %object.key,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Object upload successful"
        );

        Ok(())
    }

    async fn ping(&self) -> Result<(), BlobStorageError> {
        self.store
            .list_with_delimiter(None)
            .await
            .map(|_| ())
            .map_err(map_store_error)
    }
}
