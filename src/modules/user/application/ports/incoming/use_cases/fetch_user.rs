use async_trait::async_trait;

use crate::user::application::{domain::entities::User, ports::outgoing::UserQueryError};

#[derive(Debug, thiserror::Error, Clone)]
pub enum FetchUserError {
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Query error: {0}")]
    QueryError(#[from] UserQueryError),
}

#[async_trait]
pub trait FetchUserUseCase: Send + Sync {
    /// Looks up an active user by username.
    async fn execute(&self, username: &str) -> Result<User, FetchUserError>;
}
