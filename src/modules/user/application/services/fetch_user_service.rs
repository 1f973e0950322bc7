use async_trait::async_trait;
use tracing::debug;

use crate::user::application::{
    domain::entities::User,
    ports::{
        incoming::use_cases::{FetchUserError, FetchUserUseCase},
        outgoing::UserQuery,
    },
};

#[derive(Debug, Clone)]
pub struct FetchUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
}

impl<Q> FetchUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> FetchUserUseCase for FetchUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, username: &str) -> Result<User, FetchUserError> {
        match self.query.find_by_username(username).await? {
            Some(user) if user.is_active => Ok(user),
            Some(user) => {
                debug!(user = %user, "Lookup of inactive user");
                Err(FetchUserError::UserNotFound(username.to_string()))
            }
            None => Err(FetchUserError::UserNotFound(username.to_string())),
        }
    }
}
