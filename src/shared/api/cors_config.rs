// src/shared/api/cors_config.rs
use actix_cors::Cors;

/// CORS middleware for the configured origins. A `*` entry allows any origin.
pub fn cors_config(origins: &[String]) -> Cors {
    let cors = if origins.iter().any(|origin| origin == "*") {
        Cors::default().allow_any_origin()
    } else {
        origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };

    cors.supports_credentials()
        .allow_any_method()
        .allow_any_header()
}
