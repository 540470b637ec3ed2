use std::{env, net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use service::auth::repo::seaorm::SeaOrmUserRepository;
use service::auth::service::AuthConfig;
use service::auth::AuthService;
use service::catalog::repository::SeaOrmCatalogRepository;
use service::catalog::CatalogService;

use crate::errors::StartupError;
use crate::routes::{self, auth};

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr() -> Result<SocketAddr, StartupError> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(5000);
            (host, port)
        }
    };
    format!("{}:{}", host, port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bad bind address: {}", e)))
}

/// Token-signing secret: config file first, then environment, then a dev
/// default that must never reach production.
fn load_jwt_secret() -> String {
    if let Ok(cfg) = configs::load_default() {
        if let Some(secret) = cfg.auth.jwt_secret {
            if !secret.trim().is_empty() {
                return secret;
            }
        }
    }
    env::var("JWT_SECRET").unwrap_or_else(|_| "dev-secret-change-me".to_string())
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    // DB connection; the schema is expected to be migrated already.
    let db = models::db::connect().await?;

    let jwt_secret = load_jwt_secret();
    let catalog = Arc::new(CatalogService::new(Arc::new(SeaOrmCatalogRepository {
        db: db.clone(),
    })));
    let users = Arc::new(AuthService::new(
        Arc::new(SeaOrmUserRepository { db }),
        AuthConfig { jwt_secret: Some(jwt_secret.clone()) },
    ));
    let state = auth::ServerState {
        catalog,
        users,
        auth: auth::ServerAuthConfig { jwt_secret },
    };

    // Build router
    let cors = build_cors();
    let app: Router = routes::build_router(cors, state);

    // Bind and serve
    let addr = load_bind_addr()?;
    info!(%addr, "starting catalog server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
