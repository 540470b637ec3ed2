use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::error;

use service::catalog::domain::StoreJson;
use service::errors::ServiceError;

use crate::errors::ApiError;
use crate::routes::auth::ServerState;

#[utoipa::path(post, path = "/store/{name}", tag = "stores",
    params(("name" = String, Path, description = "Store name")),
    responses(
        (status = 201, description = "Store created", body = crate::openapi::StoreDoc),
        (status = 400, description = "Name already taken")))]
pub async fn create_store(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> Result<(StatusCode, Json<StoreJson>), ApiError> {
    match state.catalog.create_store(&name).await {
        Ok(store) => Ok((StatusCode::CREATED, Json(store))),
        Err(ServiceError::Conflict(msg)) => Err(ApiError::bad_request(msg)),
        Err(e) => {
            error!(error = %e, "create_store failed");
            Err(ApiError::internal("An error occurred creating the store."))
        }
    }
}

#[utoipa::path(get, path = "/store/{name}", tag = "stores",
    params(("name" = String, Path, description = "Store name")),
    responses(
        (status = 200, description = "Store with its items", body = crate::openapi::StoreDoc),
        (status = 404, description = "No such store")))]
pub async fn get_store(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> Result<Json<StoreJson>, ApiError> {
    match state.catalog.get_store(&name).await {
        Ok(store) => Ok(Json(store)),
        Err(ServiceError::NotFound(msg)) => Err(ApiError::not_found(msg)),
        Err(e) => {
            error!(error = %e, "get_store failed");
            Err(ApiError::internal("An error occurred fetching the store."))
        }
    }
}

#[utoipa::path(delete, path = "/store/{name}", tag = "stores",
    params(("name" = String, Path, description = "Store name")),
    responses((status = 200, description = "Deleted (or never existed)", body = crate::openapi::MessageResponse)))]
pub async fn delete_store(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    match state.catalog.delete_store(&name).await {
        Ok(()) => Ok(Json(serde_json::json!({ "message": "Store deleted" }))),
        Err(e) => {
            error!(error = %e, "delete_store failed");
            Err(ApiError::internal("An error occurred deleting the store."))
        }
    }
}

#[utoipa::path(get, path = "/stores", tag = "stores",
    responses((status = 200, description = "All stores in creation order")))]
pub async fn list_stores(
    State(state): State<ServerState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    match state.catalog.list_stores().await {
        Ok(stores) => Ok(Json(serde_json::json!({ "stores": stores }))),
        Err(e) => {
            error!(error = %e, "list_stores failed");
            Err(ApiError::internal("An error occurred listing stores."))
        }
    }
}
