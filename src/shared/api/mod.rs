mod cors_config;
mod response;

pub use cors_config::cors_config;
pub use response::ApiResponse;
