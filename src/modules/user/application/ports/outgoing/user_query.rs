// application/ports/outgoing/user_query.rs
use async_trait::async_trait;

use crate::user::application::domain::entities::User;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError>;
}
