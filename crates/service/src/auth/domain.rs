use serde::{Deserialize, Serialize};

/// Credentials body accepted by both registration and login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialsInput {
    pub username: String,
    pub password: String,
}

/// Domain user (business view; never carries the password hash).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: i32,
    pub username: String,
}

/// Login result (session)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub user: AuthUser,
    pub token: Option<String>,
}

/// Claims carried by issued access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub uid: i32,
    pub exp: usize,
}
