use actix_web::{get, web, HttpResponse, Responder};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;
use utoipa::ToSchema;

use crate::upload::application::ports::outgoing::BlobStorage;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(value_type = String, example = "healthy")]
    status: &'static str,
}

#[derive(Serialize, ToSchema)]
pub struct ReadinessResponse {
    #[schema(value_type = String, example = "ok")]
    status: &'static str,
    #[schema(value_type = String, example = "ok")]
    database: &'static str,
    #[schema(value_type = String, example = "ok")]
    storage: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Process is up", body = HealthResponse))
)]
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "healthy" })
}

/// READINESS PROBE
/// - Database answers `SELECT 1`
/// - Blob store is reachable
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "All dependencies reachable", body = ReadinessResponse),
        (status = 503, description = "A dependency is down", body = ReadinessResponse)
    )
)]
#[get("/ready")]
pub async fn readiness(
    db: web::Data<Arc<DatabaseConnection>>,
    storage: web::Data<Arc<dyn BlobStorage>>,
) -> impl Responder {
    let db_status = match db
        .execute(Statement::from_string(
            db.get_database_backend(),
            "SELECT 1",
        ))
        .await
    {
        Ok(_) => "ok",
        Err(e) => {
            warn!(error = %e, "Readiness: database check failed");
            "unhealthy"
        }
    };

    let storage_status = match storage.ping().await {
        Ok(_) => "ok",
        Err(e) => {
            warn!(error = %e, "Readiness: storage check failed");
            "unhealthy"
        }
    };

    if db_status == "ok" && storage_status == "ok" {
        HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            database: db_status,
            storage: storage_status,
        })
    } else {
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            database: db_status,
            storage: storage_status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::stubs::StubBlobStorage;
    use actix_web::{http::StatusCode, test, App};
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};
    use serde_json::Value;

    fn healthy_db() -> Arc<DatabaseConnection> {
        Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_results(vec![MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                }])
                .into_connection(),
        )
    }

    fn broken_db() -> Arc<DatabaseConnection> {
        Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_errors(vec![DbErr::Custom("connection refused".to_string())])
                .into_connection(),
        )
    }

    async fn call_ready(
        db: Arc<DatabaseConnection>,
        storage: Arc<dyn BlobStorage>,
    ) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db))
                .app_data(web::Data::new(storage))
                .service(readiness),
        )
        .await;

        let req = test::TestRequest::get().uri("/ready").to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_health_is_static() {
        let app = test::init_service(
            App::new()
                .service(health)
                .service(web::scope("/api/v1").service(health)),
        )
        .await;

        for uri in ["/health", "/api/v1/health"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body, serde_json::json!({ "status": "healthy" }));
        }
    }

    #[actix_web::test]
    async fn test_ready_when_all_dependencies_up() {
        let (status, body) = call_ready(healthy_db(), Arc::new(StubBlobStorage::reachable())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["database"], "ok");
        assert_eq!(body["storage"], "ok");
    }

    #[actix_web::test]
    async fn test_not_ready_when_database_down() {
        let (status, body) = call_ready(broken_db(), Arc::new(StubBlobStorage::reachable())).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "unhealthy");
        assert_eq!(body["database"], "unhealthy");
        assert_eq!(body["storage"], "ok");
    }

    #[actix_web::test]
    async fn test_not_ready_when_storage_down() {
        let (status, body) = call_ready(healthy_db(), Arc::new(StubBlobStorage::unreachable())).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["database"], "ok");
        assert_eq!(body["storage"], "unhealthy");
    }
}
