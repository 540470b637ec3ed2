use async_trait::async_trait;

use super::domain::AuthUser;
use super::errors::AuthError;

/// A stored user together with its password hash; only the auth service
/// ever sees the hash.
#[derive(Debug, Clone)]
pub struct StoredUser {
    pub user: AuthUser,
    pub password_hash: String,
}

/// Repository abstraction for auth-related persistence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<StoredUser>, AuthError>;
    async fn insert_user(&self, username: &str, password_hash: &str) -> Result<AuthUser, AuthError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockUserRepository {
        users: Mutex<HashMap<String, StoredUser>>, // key: username
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn find_by_username(&self, username: &str) -> Result<Option<StoredUser>, AuthError> {
            let users = self.users.lock().unwrap();
            Ok(users.get(username).cloned())
        }

        async fn insert_user(&self, username: &str, password_hash: &str) -> Result<AuthUser, AuthError> {
            let mut users = self.users.lock().unwrap();
            if users.contains_key(username) {
                return Err(AuthError::Conflict);
            }
            let user = AuthUser { id: users.len() as i32 + 1, username: username.to_string() };
            users.insert(
                username.to_string(),
                StoredUser { user: user.clone(), password_hash: password_hash.to_string() },
            );
            Ok(user)
        }
    }
}
