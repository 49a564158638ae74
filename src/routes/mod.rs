//! Routers por entidad
//!
//! Cada módulo expone un `create_*_router()` que se anida bajo
//! `/api/<entidad>` en `main`. El contrato de respuesta es el del
//! frontend: `{"success": true}` o 500 `{"success": false}` para
//! mutaciones, `{"data": [...]}` para lecturas.

pub mod assignment_routes;
pub mod customer_routes;
pub mod dispatcher_routes;
pub mod driver_routes;
pub mod employee_routes;
pub mod invoice_routes;
pub mod location_routes;
pub mod order_routes;
pub mod route_routes;
pub mod truck_routes;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::database::DatabaseConnection;
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};

/// Router completo de la API
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/db-check", get(db_check))
        .nest("/route", route_routes::create_route_router())
        .nest("/order", order_routes::create_order_router())
        .nest("/location", location_routes::create_location_router())
        .nest("/invoice", invoice_routes::create_invoice_router())
        .nest("/customer", customer_routes::create_customer_router())
        .nest("/employee", employee_routes::create_employee_router())
        .nest("/dispatcher", dispatcher_routes::create_dispatcher_router())
        .nest("/driver", driver_routes::create_driver_router())
        .nest("/truck", truck_routes::create_truck_router())
        .nest(
            "/driver-drives",
            assignment_routes::create_driver_drives_router(),
        )
        .nest("/assigned", assignment_routes::create_assigned_router())
}

/// Endpoint de prueba simple
pub async fn health() -> Json<Value> {
    Json(json!({
        "service": "freight-logistics",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Round-trip mínimo contra la base con una conexión prestada del pool
async fn db_check(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let connection = DatabaseConnection::from_pool(state.pool.clone());
    connection
        .with_connection(|mut conn| async move {
            sqlx::query("SELECT 1")
                .execute(&mut *conn)
                .await
                .map_err(AppError::from)?;
            AppResult::Ok(())
        })
        .await?;
    Ok(Json(json!({ "connected": true })))
}

/// `{success}` o 500 `{success: false}`
pub(crate) fn mutation_response(ok: bool) -> (StatusCode, Json<Value>) {
    if ok {
        (StatusCode::OK, Json(json!({ "success": true })))
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "success": false })),
        )
    }
}

/// `{data: [...]}`; las filas son arrays de valores en orden de esquema
pub(crate) fn data_response(rows: Vec<Vec<Value>>) -> Json<Value> {
    Json(json!({ "data": rows }))
}
