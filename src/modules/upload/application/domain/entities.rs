use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Coarse media kind, used to pick the storage prefix of an upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    Video,
    Audio,
    Image,
    /// Fallback for every type that is not video, audio or image.
    Document,
}

impl FileCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileCategory::Video => "video",
            FileCategory::Audio => "audio",
            FileCategory::Image => "image",
            FileCategory::Document => "document",
        }
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Name an upload is stored under: `<uuid><original extension>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StoredFileName(String);

impl StoredFileName {
    pub(crate) fn new(name: String) -> Self {
        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for StoredFileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Permitted MIME types. Membership is an exact, case-sensitive match.
///
/// Built once from configuration and shared read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowList(Vec<String>);

impl AllowList {
    pub fn new<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list: Vec<String> = Vec::new();
        for t in types {
            let t = t.into();
            if !list.contains(&t) {
                list.push(t);
            }
        }
        Self(list)
    }

    pub fn contains(&self, content_type: &str) -> bool {
        self.0.iter().any(|t| t == content_type)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AllowList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}

/// What the web layer knows about an incoming file before its bytes are read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadCandidate {
    pub declared_content_type: Option<String>,
    pub original_filename: String,
}

impl UploadCandidate {
    pub fn new(declared_content_type: Option<String>, original_filename: String) -> Self {
        Self {
            declared_content_type,
            original_filename,
        }
    }

    pub fn declared_content_type(&self) -> Option<&str> {
        self.declared_content_type.as_deref()
    }
}
