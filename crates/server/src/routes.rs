use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

pub mod auth;
pub mod items;
pub mod stores;

use auth::ServerState;

#[utoipa::path(get, path = "/health", tag = "health",
    responses((status = 200, description = "Liveness probe")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: public store/auth routes plus
/// token-gated item routes.
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/auth", post(auth::authenticate))
        .route("/register", post(auth::register))
        .route(
            "/store/:name",
            post(stores::create_store)
                .get(stores::get_store)
                .delete(stores::delete_store),
        )
        .route("/stores", get(stores::list_stores))
        .route("/items", get(items::list_items));

    // Item mutation and lookup-by-name require a bearer token; the item
    // listing stays public.
    let protected = Router::new()
        .route(
            "/item/:name",
            post(items::create_item)
                .put(items::put_item)
                .get(items::get_item)
                .delete(items::delete_item),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::require_jwt));

    public
        .merge(protected)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", crate::openapi::ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
