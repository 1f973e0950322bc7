use super::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity, Model as UserModel,
};
use crate::user::application::domain::entities::User;
use crate::user::application::ports::outgoing::{UserQuery, UserQueryError};
use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_user(model: UserModel) -> User {
        User {
            id: model.id,
            username: model.username,
            email: model.email,
            full_name: model.full_name,
            hashed_password: model.hashed_password,
            is_active: model.is_active,
            created_at: model.created_at.with_timezone(&chrono::Utc),
            updated_at: model.updated_at.map(|t| t.with_timezone(&chrono::Utc)),
        }
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError> {
        let user = UserEntity::find()
            .filter(UserColumn::Username.eq(username))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(user.map(Self::map_to_user))
    }
}
