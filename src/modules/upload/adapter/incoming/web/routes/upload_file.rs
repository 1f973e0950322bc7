// src/modules/upload/adapter/incoming/web/routes/upload_file.rs

use actix_multipart::{Field, Multipart, MultipartError};
use actix_web::{http::header, http::StatusCode, post, web, HttpResponse};
use bytes::BytesMut;
use futures::StreamExt;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::upload::application::domain::{
    entities::UploadCandidate, intake_guard::validate_type,
    policies::upload_policy::UploadPolicy,
};
use crate::upload::application::ports::incoming::use_cases::{
    UploadFileCommand, UploadFileCommandError, UploadFileError, UploadedFile,
};
use crate::AppState;

const FILE_FIELD: &str = "file";

//
// ──────────────────────────────────────────────────────────
// Request schema (documentation only)
// ──────────────────────────────────────────────────────────
//

#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadFileForm {
    /// File content. The part's `Content-Type` header is the declared type.
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    post,
    path = "/api/v1/files",
    tag = "files",
    request_body(content = UploadFileForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "File stored", body = inline(SuccessResponse<UploadedFile>)),
        (status = 400, description = "Missing file, unsupported type or file too large", body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "UNSUPPORTED_MEDIA_TYPE",
                    "message": "File type 'application/zip' not allowed. Allowed types: video/mp4, video/quicktime, video/x-msvideo, audio/mpeg, audio/wav, audio/x-wav, application/pdf, text/plain, image/jpeg, image/png, image/gif"
                }
            })
        ),
        (status = 502, description = "Blob storage unavailable", body = ErrorResponse)
    )
)]
#[post("/files")]
pub async fn upload_file_handler(mut payload: Multipart, data: web::Data<AppState>) -> HttpResponse {
    let policy = data.upload_policy.as_ref();

    while let Some(item) = payload.next().await {
        let mut field = match item {
            Ok(field) => field,
            Err(e) => return invalid_multipart(e),
        };

        let is_file_field = field
            .content_disposition()
            .and_then(|cd| cd.get_name())
            .is_some_and(|name| name == FILE_FIELD);

        if !is_file_field {
            if let Err(e) = drain(&mut field).await {
                return invalid_multipart(e);
            }
            continue;
        }

        let candidate = UploadCandidate::new(
            field
                .headers()
                .get(header::CONTENT_TYPE)
                .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned()),
            field
                .content_disposition()
                .and_then(|cd| cd.get_filename())
                .unwrap_or_default()
                .to_string(),
        );

        // Reject before reading the body
        if let Err(e) = validate_type(candidate.declared_content_type(), &policy.allow_list) {
            warn!(content_type = %e.content_type, "Rejected upload with unsupported type");
            return map_command_error(e.into());
        }

        let bytes = match read_limited(&mut field, policy).await {
            Ok(bytes) => bytes,
            Err(response) => return response,
        };

        let command = match UploadFileCommand::builder()
            .candidate(candidate)
            .bytes(bytes.freeze())
            .build(policy)
        {
            Ok(cmd) => cmd,
            Err(e) => return map_command_error(e),
        };

        return match data.upload_file_use_case.execute(command).await {
            Ok(uploaded) => ApiResponse::created(uploaded),
            Err(e) => map_upload_error(e),
        };
    }

    ApiResponse::bad_request("MISSING_FILE", "Multipart field 'file' is required")
}

async fn drain(field: &mut Field) -> Result<(), MultipartError> {
    while let Some(chunk) = field.next().await {
        chunk?;
    }
    Ok(())
}

/// Reads the field body, stopping as soon as it exceeds the policy limit.
async fn read_limited(field: &mut Field, policy: &UploadPolicy) -> Result<BytesMut, HttpResponse> {
    let mut buf = BytesMut::new();

    while let Some(chunk) = field.next().await {
        let chunk = chunk.map_err(invalid_multipart)?;
        let read = (buf.len() + chunk.len()) as u64;

        if read > policy.max_file_size_bytes {
            return Err(map_command_error(UploadFileCommandError::FileTooLarge {
                max_bytes: policy.max_file_size_bytes,
                actual_bytes: read,
            }));
        }
        buf.extend_from_slice(&chunk);
    }

    Ok(buf)
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn invalid_multipart(e: MultipartError) -> HttpResponse {
    ApiResponse::bad_request("INVALID_MULTIPART", &format!("Invalid multipart body: {}", e))
}

fn map_command_error(e: UploadFileCommandError) -> HttpResponse {
    match e {
        UploadFileCommandError::MissingField(field) => {
            ApiResponse::bad_request("MISSING_FIELD", &format!("Missing field: {}", field))
        }
        UploadFileCommandError::UnsupportedMediaType(e) => {
            ApiResponse::bad_request("UNSUPPORTED_MEDIA_TYPE", &e.to_string())
        }
        UploadFileCommandError::FileTooLarge { max_bytes, .. } => ApiResponse::bad_request(
            "FILE_TOO_LARGE",
            &format!("File too large (max {} bytes)", max_bytes),
        ),
    }
}

fn map_upload_error(e: UploadFileError) -> HttpResponse {
    match e {
        UploadFileError::StorageError(e) => {
            error!("Storage error storing upload: {}", e);
            ApiResponse::error(
                StatusCode::BAD_GATEWAY,
                "STORAGE_ERROR",
                "Failed to store file",
            )
        }
    }
}
