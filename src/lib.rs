//! Backend de gestión logística
//!
//! Capa HTTP fina sobre PostgreSQL: CRUD y consultas filtradas para
//! rutas, pedidos, facturas, personal y flota.

pub mod config;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod query;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;

use axum::routing::get;
use axum::Router;

use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use state::AppState;

/// Aplicación completa: rutas anidadas bajo `/api` más CORS.
/// En desarrollo se permite cualquier origen; fuera de desarrollo se
/// respetan los orígenes configurados.
pub fn create_app(state: AppState) -> Router {
    let cors = if state.config.is_development() || state.config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(state.config.cors_origins.clone())
    };

    Router::new()
        .route("/health", get(routes::health))
        .nest("/api", routes::create_api_router())
        .layer(cors)
        .with_state(state)
}
