use uuid::Uuid;

use crate::upload::application::domain::entities::{AllowList, FileCategory, StoredFileName};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("File type '{content_type}' not allowed. Allowed types: {}", .allowed.join(", "))]
pub struct UnsupportedMediaType {
    /// Declared type as received; empty when the client sent none.
    pub content_type: String,
    pub allowed: Vec<String>,
}

/// Accept `declared_content_type` only if it is in `allow_list` verbatim.
pub fn validate_type(
    declared_content_type: Option<&str>,
    allow_list: &AllowList,
) -> Result<(), UnsupportedMediaType> {
    match declared_content_type {
        Some(content_type) if allow_list.contains(content_type) => Ok(()),
        other => Err(UnsupportedMediaType {
            content_type: other.unwrap_or_default().to_string(),
            allowed: allow_list.as_slice().to_vec(),
        }),
    }
}

/// Everything from the last `.` of the final path component to the end, dot
/// included. Empty if that component has no dot.
///
/// A leading dot counts: `.bashrc` yields `.bashrc`.
pub fn file_extension(file_name: &str) -> &str {
    let base = match file_name.rfind(&['/', '\\'][..]) {
        Some(idx) => &file_name[idx + 1..],
        None => file_name,
    };

    match base.rfind('.') {
        Some(idx) => &base[idx..],
        None => "",
    }
}

/// Fresh `<uuid v4><extension>` name for storing `original_filename`.
pub fn generate_unique_name(original_filename: &str) -> StoredFileName {
    let extension = file_extension(original_filename);
    StoredFileName::new(format!("{}{}", Uuid::new_v4(), extension))
}

pub fn classify(declared_content_type: &str) -> FileCategory {
    if declared_content_type.starts_with("video/") {
        FileCategory::Video
    } else if declared_content_type.starts_with("audio/") {
        FileCategory::Audio
    } else if declared_content_type.starts_with("image/") {
        FileCategory::Image
    } else {
        FileCategory::Document
    }
}
