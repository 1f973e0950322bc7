use crate::config::{Settings, DEFAULT_ALLOWED_UPLOAD_TYPES};
use crate::upload::application::domain::entities::AllowList;

#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_file_size_bytes: u64,
    pub allow_list: AllowList,
    pub bucket_name: String,
}

impl UploadPolicy {
    pub const DEFAULT_BUCKET_NAME: &'static str = "memorialyze-media";
    pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 100 * 1024 * 1024;

    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            max_file_size_bytes: settings.max_upload_size,
            allow_list: AllowList::new(settings.allowed_upload_types.iter().cloned()),
            bucket_name: settings.s3_bucket_name.clone(),
        }
    }

    /// Handy for unit tests or custom wiring (no env reads).
    pub fn new(bucket_name: String) -> Self {
        Self {
            max_file_size_bytes: Self::DEFAULT_MAX_FILE_SIZE_BYTES,
            allow_list: AllowList::new(DEFAULT_ALLOWED_UPLOAD_TYPES.iter().copied()),
            bucket_name,
        }
    }

    pub fn with_max_file_size_bytes(mut self, max_file_size_bytes: u64) -> Self {
        self.max_file_size_bytes = max_file_size_bytes;
        self
    }
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BUCKET_NAME.to_string())
    }
}
