use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
    Json,
};
use serde::Serialize;

use service::auth::domain::CredentialsInput;
use service::auth::errors::AuthError;
use service::auth::repo::seaorm::SeaOrmUserRepository;
use service::auth::AuthService;
use service::catalog::repository::SeaOrmCatalogRepository;
use service::catalog::CatalogService;

use crate::errors::ApiError;

/// 401 body for protected routes, kept word-for-word stable for clients.
pub const UNAUTHORIZED_MESSAGE: &str =
    "Could not authorize. Did you include a valid Authorization Header";

/// Scheme expected in the Authorization header: `JWT <token>`.
const AUTH_SCHEME_PREFIX: &str = "JWT ";

#[derive(Clone)]
pub struct ServerAuthConfig {
    pub jwt_secret: String,
}

#[derive(Clone)]
pub struct ServerState {
    pub catalog: Arc<CatalogService<SeaOrmCatalogRepository>>,
    pub users: Arc<AuthService<SeaOrmUserRepository>>,
    pub auth: ServerAuthConfig,
}

#[derive(Serialize)]
pub struct TokenOutput {
    pub access_token: String,
}

#[utoipa::path(post, path = "/auth", tag = "auth",
    request_body = crate::openapi::CredentialsRequest,
    responses(
        (status = 200, description = "Token issued"),
        (status = 401, description = "Invalid credentials")))]
pub async fn authenticate(
    State(state): State<ServerState>,
    Json(input): Json<CredentialsInput>,
) -> Result<Json<TokenOutput>, ApiError> {
    let session = state
        .users
        .login(input)
        .await
        .map_err(|_| ApiError::unauthorized("Invalid credentials"))?;
    match session.token {
        Some(token) => Ok(Json(TokenOutput { access_token: token })),
        None => Err(ApiError::internal("token generation failed")),
    }
}

#[utoipa::path(post, path = "/register", tag = "auth",
    request_body = crate::openapi::CredentialsRequest,
    responses(
        (status = 201, description = "User created"),
        (status = 400, description = "Duplicate or invalid username")))]
pub async fn register(
    State(state): State<ServerState>,
    Json(input): Json<CredentialsInput>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    match state.users.register(input).await {
        Ok(_) => Ok((
            StatusCode::CREATED,
            Json(serde_json::json!({ "message": "User created successfully." })),
        )),
        Err(e @ AuthError::Conflict) => Err(ApiError::bad_request(e.to_string())),
        Err(AuthError::Validation(msg)) => Err(ApiError::bad_request(msg)),
        Err(e) => Err(ApiError::internal(e.to_string())),
    }
}

/// Gate for item routes: a syntactically valid, unexpired `JWT <token>`
/// Authorization header is required; anything else gets the fixed 401 body.
pub async fn require_jwt(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix(AUTH_SCHEME_PREFIX));
    match token {
        Some(token) if service::auth::service::verify_token(&state.auth.jwt_secret, token).is_ok() => {
            Ok(next.run(req).await)
        }
        _ => Err(ApiError::unauthorized(UNAUTHORIZED_MESSAGE)),
    }
}
