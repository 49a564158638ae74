use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use validator::Validate;

use crate::dto::common::FilterParams;
use crate::dto::employee_dto::{
    DeleteEmployeeRequest, InsertEmployeeRequest, UpdateEmployeeRequest,
};
use crate::models::employee::EmployeeColumn;
use crate::query::{Condition, Filter};
use crate::repositories::employee_repository::EmployeeRepository;
use crate::routes::{data_response, mutation_response};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_employee_router() -> Router<AppState> {
    Router::new()
        .route("/initiate", post(initiate))
        .route("/", post(insert).get(fetch_all).delete(remove))
        .route("/update", post(update))
        .route("/filter", get(filter))
}

async fn initiate(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let repository = EmployeeRepository::new(state.pool.clone());
    mutation_response(repository.initialize().await)
}

async fn insert(
    State(state): State<AppState>,
    Json(request): Json<InsertEmployeeRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    request.validate()?;
    let repository = EmployeeRepository::new(state.pool.clone());
    let inserted = repository
        .insert(
            &request.employee_id,
            request.sin,
            request.phone_number,
            request.email,
            request.work_location,
        )
        .await;
    Ok(mutation_response(inserted))
}

async fn fetch_all(State(state): State<AppState>) -> Json<Value> {
    let repository = EmployeeRepository::new(state.pool.clone());
    data_response(repository.fetch_all().await)
}

async fn filter(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Result<Json<Value>, AppError> {
    let condition = Condition::<EmployeeColumn>::parse(&params.column, &params.op, &params.value)?;
    let repository = EmployeeRepository::new(state.pool.clone());
    let rows = repository.select_where(&Filter::new(condition)).await?;
    Ok(data_response(rows))
}

async fn update(
    State(state): State<AppState>,
    Json(request): Json<UpdateEmployeeRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    request.validate()?;
    let repository = EmployeeRepository::new(state.pool.clone());
    let updated = repository
        .update_attribute(&request.employee_id, &request.attribute, &request.new_value)
        .await?;
    Ok(mutation_response(updated))
}

async fn remove(
    State(state): State<AppState>,
    Json(request): Json<DeleteEmployeeRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    request.validate()?;
    let repository = EmployeeRepository::new(state.pool.clone());
    Ok(mutation_response(repository.delete(&request.employee_id).await))
}
