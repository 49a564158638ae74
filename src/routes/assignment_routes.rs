//! Routers de las tablas de asociación
//!
//! `driver_drives` y `assigned` borran por su clave compuesta completa.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use validator::Validate;

use crate::dto::assignment_dto::{
    AssignedRequest, DriverDrivesRequest, UpdateDriverDrivesRequest,
};
use crate::dto::common::FilterParams;
use crate::models::assignment::{AssignedColumn, DriverDrivesColumn};
use crate::query::{Condition, Filter};
use crate::repositories::assignment_repository::AssignmentRepository;
use crate::routes::{data_response, mutation_response};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_driver_drives_router() -> Router<AppState> {
    Router::new()
        .route("/initiate", post(initiate_driver_drives))
        .route(
            "/",
            post(insert_driver_drives)
                .get(fetch_driver_drives)
                .delete(remove_driver_drives),
        )
        .route("/update", post(update_driver_drives))
        .route("/filter", get(filter_driver_drives))
}

pub fn create_assigned_router() -> Router<AppState> {
    Router::new()
        .route("/initiate", post(initiate_assigned))
        .route(
            "/",
            post(insert_assigned).get(fetch_assigned).delete(remove_assigned),
        )
        .route("/filter", get(filter_assigned))
}

async fn initiate_driver_drives(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let repository = AssignmentRepository::new(state.pool.clone());
    mutation_response(repository.initialize_driver_drives().await)
}

async fn insert_driver_drives(
    State(state): State<AppState>,
    Json(request): Json<DriverDrivesRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    request.validate()?;
    let repository = AssignmentRepository::new(state.pool.clone());
    let inserted = repository
        .insert_driver_drives(&request.plate_number, &request.employee_id)
        .await;
    Ok(mutation_response(inserted))
}

async fn fetch_driver_drives(State(state): State<AppState>) -> Json<Value> {
    let repository = AssignmentRepository::new(state.pool.clone());
    data_response(repository.fetch_all_driver_drives().await)
}

async fn filter_driver_drives(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Result<Json<Value>, AppError> {
    let condition =
        Condition::<DriverDrivesColumn>::parse(&params.column, &params.op, &params.value)?;
    let repository = AssignmentRepository::new(state.pool.clone());
    let rows = repository.select_driver_drives(&Filter::new(condition)).await?;
    Ok(data_response(rows))
}

async fn update_driver_drives(
    State(state): State<AppState>,
    Json(request): Json<UpdateDriverDrivesRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    request.validate()?;
    let repository = AssignmentRepository::new(state.pool.clone());
    let updated = repository
        .update_driver_drives(
            &request.plate_number,
            &request.employee_id,
            &request.attribute,
            &request.new_value,
        )
        .await?;
    Ok(mutation_response(updated))
}

async fn remove_driver_drives(
    State(state): State<AppState>,
    Json(request): Json<DriverDrivesRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    request.validate()?;
    let repository = AssignmentRepository::new(state.pool.clone());
    let deleted = repository
        .delete_driver_drives(&request.plate_number, &request.employee_id)
        .await;
    Ok(mutation_response(deleted))
}

async fn initiate_assigned(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let repository = AssignmentRepository::new(state.pool.clone());
    mutation_response(repository.initialize_assigned().await)
}

async fn insert_assigned(
    State(state): State<AppState>,
    Json(request): Json<AssignedRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    request.validate()?;
    let repository = AssignmentRepository::new(state.pool.clone());
    let inserted = repository
        .insert_assigned(
            &request.plate_number,
            &request.employee_id,
            &request.order_id,
        )
        .await;
    Ok(mutation_response(inserted))
}

async fn fetch_assigned(State(state): State<AppState>) -> Json<Value> {
    let repository = AssignmentRepository::new(state.pool.clone());
    data_response(repository.fetch_all_assigned().await)
}

async fn filter_assigned(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Result<Json<Value>, AppError> {
    let condition = Condition::<AssignedColumn>::parse(&params.column, &params.op, &params.value)?;
    let repository = AssignmentRepository::new(state.pool.clone());
    let rows = repository.select_assigned(&Filter::new(condition)).await?;
    Ok(data_response(rows))
}

async fn remove_assigned(
    State(state): State<AppState>,
    Json(request): Json<AssignedRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    request.validate()?;
    let repository = AssignmentRepository::new(state.pool.clone());
    let deleted = repository
        .delete_assigned(
            &request.plate_number,
            &request.employee_id,
            &request.order_id,
        )
        .await;
    Ok(mutation_response(deleted))
}
