use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    Json,
};
use tracing::error;

use service::catalog::domain::{ItemInput, ItemJson};
use service::errors::ServiceError;

use crate::errors::ApiError;
use crate::routes::auth::ServerState;

#[utoipa::path(post, path = "/item/{name}", tag = "items",
    params(("name" = String, Path, description = "Item name")),
    request_body = crate::openapi::ItemForm,
    responses(
        (status = 201, description = "Item created", body = crate::openapi::ItemDoc),
        (status = 400, description = "Name already taken"),
        (status = 401, description = "Missing or invalid token")))]
pub async fn create_item(
    State(state): State<ServerState>,
    Path(name): Path<String>,
    Form(input): Form<ItemInput>,
) -> Result<(StatusCode, Json<ItemJson>), ApiError> {
    match state.catalog.create_item(&name, input.price, input.store_id).await {
        Ok(item) => Ok((StatusCode::CREATED, Json(item))),
        Err(ServiceError::Conflict(msg)) => Err(ApiError::bad_request(msg)),
        Err(e) => {
            error!(error = %e, "create_item failed");
            Err(ApiError::internal("An error occurred inserting the item."))
        }
    }
}

#[utoipa::path(put, path = "/item/{name}", tag = "items",
    params(("name" = String, Path, description = "Item name")),
    request_body = crate::openapi::ItemForm,
    responses(
        (status = 200, description = "Item created or price updated", body = crate::openapi::ItemDoc),
        (status = 401, description = "Missing or invalid token")))]
pub async fn put_item(
    State(state): State<ServerState>,
    Path(name): Path<String>,
    Form(input): Form<ItemInput>,
) -> Result<Json<ItemJson>, ApiError> {
    match state.catalog.put_item(&name, input.price, input.store_id).await {
        Ok(item) => Ok(Json(item)),
        Err(e) => {
            error!(error = %e, "put_item failed");
            Err(ApiError::internal("An error occurred updating the item."))
        }
    }
}

#[utoipa::path(get, path = "/item/{name}", tag = "items",
    params(("name" = String, Path, description = "Item name")),
    responses(
        (status = 200, description = "Item found", body = crate::openapi::ItemDoc),
        (status = 404, description = "No such item"),
        (status = 401, description = "Missing or invalid token")))]
pub async fn get_item(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> Result<Json<ItemJson>, ApiError> {
    match state.catalog.get_item(&name).await {
        Ok(item) => Ok(Json(item)),
        Err(ServiceError::NotFound(msg)) => Err(ApiError::not_found(msg)),
        Err(e) => {
            error!(error = %e, "get_item failed");
            Err(ApiError::internal("An error occurred fetching the item."))
        }
    }
}

#[utoipa::path(delete, path = "/item/{name}", tag = "items",
    params(("name" = String, Path, description = "Item name")),
    responses(
        (status = 200, description = "Deleted (or never existed)", body = crate::openapi::MessageResponse),
        (status = 401, description = "Missing or invalid token")))]
pub async fn delete_item(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    match state.catalog.delete_item(&name).await {
        Ok(()) => Ok(Json(serde_json::json!({ "message": "Item deleted" }))),
        Err(e) => {
            error!(error = %e, "delete_item failed");
            Err(ApiError::internal("An error occurred deleting the item."))
        }
    }
}

#[utoipa::path(get, path = "/items", tag = "items",
    responses((status = 200, description = "All items in creation order")))]
pub async fn list_items(
    State(state): State<ServerState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    match state.catalog.list_items().await {
        Ok(items) => Ok(Json(serde_json::json!({ "items": items }))),
        Err(e) => {
            error!(error = %e, "list_items failed");
            Err(ApiError::internal("An error occurred listing items."))
        }
    }
}
