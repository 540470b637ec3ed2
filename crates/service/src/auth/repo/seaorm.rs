use sea_orm::DatabaseConnection;

use crate::auth::domain::AuthUser;
use crate::auth::errors::AuthError;
use crate::auth::repository::{StoredUser, UserRepository};

pub struct SeaOrmUserRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<StoredUser>, AuthError> {
        let res = models::user::find_by_username(&self.db, username)
            .await
            .map_err(|e| AuthError::Repository(e.to_string()))?;
        Ok(res.map(|u| StoredUser {
            user: AuthUser { id: u.id, username: u.username },
            password_hash: u.password_hash,
        }))
    }

    async fn insert_user(&self, username: &str, password_hash: &str) -> Result<AuthUser, AuthError> {
        let created = models::user::create(&self.db, username, password_hash)
            .await
            .map_err(|e| AuthError::Repository(e.to_string()))?;
        Ok(AuthUser { id: created.id, username: created.username })
    }
}
