use actix_web::{get, web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::user::application::{
    domain::entities::User, ports::incoming::use_cases::FetchUserError,
};
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileResponse {
    pub id: Uuid,
    #[schema(example = "oma_hilde")]
    pub username: String,
    #[schema(example = "hilde@example.com")]
    pub email: String,
    #[schema(example = "Hilde Brandt")]
    pub full_name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<User> for UserProfileResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            full_name: user.full_name,
            is_active: user.is_active,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{username}",
    tag = "users",
    params(("username" = String, Path, description = "Username of the account")),
    responses(
        (status = 200, description = "User profile", body = inline(SuccessResponse<UserProfileResponse>)),
        (status = 404, description = "No active user with that username", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/users/{username}")]
pub async fn get_user_handler(path: web::Path<String>, data: web::Data<AppState>) -> HttpResponse {
    let username = path.into_inner();

    match data.fetch_user_use_case.execute(&username).await {
        Ok(user) => ApiResponse::success(UserProfileResponse::from(user)),
        Err(e) => map_fetch_error(e),
    }
}

fn map_fetch_error(e: FetchUserError) -> HttpResponse {
    match e {
        FetchUserError::UserNotFound(username) => ApiResponse::not_found(
            "USER_NOT_FOUND",
            &format!("User '{}' not found", username),
        ),
        FetchUserError::QueryError(e) => {
            error!("Database error fetching user: {}", e);
            ApiResponse::internal_error()
        }
    }
}
