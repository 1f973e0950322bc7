use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::OpenApi;

use crate::health::{HealthResponse, ReadinessResponse};
use crate::upload::adapter::incoming::web::routes::UploadFileForm;
use crate::upload::application::domain::entities::FileCategory;
use crate::upload::application::ports::incoming::use_cases::UploadedFile;
use crate::user::adapter::incoming::web::routes::UserProfileResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Memorialyze API",
        version = "0.1.0",
        description = "Intake and storage API for the Memorialyze family archive"
    ),
    paths(
        // Health
        crate::health::health,
        crate::health::readiness,

        // Files
        crate::upload::adapter::incoming::web::routes::upload_file_handler,

        // Users
        crate::user::adapter::incoming::web::routes::get_user_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<UploadedFile>,
            SuccessResponse<UserProfileResponse>,
            ErrorResponse,
            ErrorDetail,

            HealthResponse,
            ReadinessResponse,
            UploadFileForm,
            UploadedFile,
            FileCategory,
            UserProfileResponse
        )
    ),
    tags(
        (name = "health", description = "Liveness and readiness probes"),
        (name = "files", description = "Archive file uploads"),
        (name = "users", description = "User profiles"),
    )
)]
pub struct ApiDoc;
