mod api;
mod config;
pub mod health;
pub mod modules;
mod shared;

pub use modules::upload;
pub use modules::user;

use crate::api::openapi::ApiDoc;
use crate::config::Settings;
use crate::shared::api::cors_config;
use crate::upload::adapter::outgoing::ObjectStoreStorage;
use crate::upload::application::domain::policies::upload_policy::UploadPolicy;
use crate::upload::application::ports::incoming::use_cases::UploadFileUseCase;
use crate::upload::application::ports::outgoing::BlobStorage;
use crate::upload::application::services::UploadFileService;
use crate::user::adapter::outgoing::UserQueryPostgres;
use crate::user::application::ports::incoming::use_cases::FetchUserUseCase;
use crate::user::application::services::FetchUserService;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub upload_file_use_case: Arc<dyn UploadFileUseCase + Send + Sync>,
    pub fetch_user_use_case: Arc<dyn FetchUserUseCase + Send + Sync>,
    pub upload_policy: Arc<UploadPolicy>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings =
        Settings::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    info!("Starting up {} API", settings.project_name);

    // Database connection
    let mut opt = ConnectOptions::new(settings.database_url.clone());
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::ConnectionRefused, e))?;
    let db_arc = Arc::new(conn);

    // Blob storage
    let storage = ObjectStoreStorage::s3(
        &settings.s3_bucket_name,
        &settings.s3_region,
        Some(settings.s3_endpoint_url.as_str()),
    )
    .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let storage_arc: Arc<dyn BlobStorage> = Arc::new(storage.clone());

    let upload_policy = UploadPolicy::from_settings(&settings);
    info!(
        bucket = %upload_policy.bucket_name,
        max_file_size_bytes = upload_policy.max_file_size_bytes,
        allowed_types = %upload_policy.allow_list,
        "Upload policy loaded"
    );

    let upload_file_use_case = UploadFileService::new(storage);
    let fetch_user_use_case = FetchUserService::new(UserQueryPostgres::new(Arc::clone(&db_arc)));

    let state = AppState {
        upload_file_use_case: Arc::new(upload_file_use_case),
        fetch_user_use_case: Arc::new(fetch_user_use_case),
        upload_policy: Arc::new(upload_policy),
    };

    let server_url = settings.server_url();
    let api_prefix = settings.api_v1_str.clone();
    let cors_origins = settings.cors_origins.clone();
    info!("Server run on: {}", server_url);

    let result = HttpServer::new(move || {
        App::new()
            .wrap(cors_config(&cors_origins))
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(web::Data::new(Arc::clone(&storage_arc)))
            .configure(|cfg| init_routes(cfg, &api_prefix))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await;

    info!("Shutting down {} API", settings.project_name);
    result
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig, api_prefix: &str) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);

    cfg.service(
        web::scope(api_prefix)
            .service(crate::health::health)
            // Files
            .service(crate::upload::adapter::incoming::web::routes::upload_file_handler)
            // Users
            .service(crate::user::adapter::incoming::web::routes::get_user_handler),
    );
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
