use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use validator::Validate;

use crate::dto::common::FilterParams;
use crate::dto::customer_dto::{
    DeleteCustomerRequest, InsertCustomerRequest, UpdateCustomerRequest,
};
use crate::models::customer::CustomerColumn;
use crate::query::{Condition, Filter};
use crate::repositories::customer_repository::CustomerRepository;
use crate::routes::{data_response, mutation_response};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_customer_router() -> Router<AppState> {
    Router::new()
        .route("/initiate", post(initiate))
        .route("/", post(insert).get(fetch_all).delete(remove))
        .route("/update", post(update))
        .route("/filter", get(filter))
}

async fn initiate(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let repository = CustomerRepository::new(state.pool.clone());
    mutation_response(repository.initialize().await)
}

async fn insert(
    State(state): State<AppState>,
    Json(request): Json<InsertCustomerRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    request.validate()?;
    let repository = CustomerRepository::new(state.pool.clone());
    let inserted = repository
        .insert(
            &request.customer_id,
            request.phone_number,
            request.email,
            request.name,
        )
        .await;
    Ok(mutation_response(inserted))
}

async fn fetch_all(State(state): State<AppState>) -> Json<Value> {
    let repository = CustomerRepository::new(state.pool.clone());
    data_response(repository.fetch_all().await)
}

async fn filter(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Result<Json<Value>, AppError> {
    let condition = Condition::<CustomerColumn>::parse(&params.column, &params.op, &params.value)?;
    let repository = CustomerRepository::new(state.pool.clone());
    let rows = repository.select_where(&Filter::new(condition)).await?;
    Ok(data_response(rows))
}

async fn update(
    State(state): State<AppState>,
    Json(request): Json<UpdateCustomerRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    request.validate()?;
    let repository = CustomerRepository::new(state.pool.clone());
    let updated = repository
        .update_attribute(&request.customer_id, &request.attribute, &request.new_value)
        .await?;
    Ok(mutation_response(updated))
}

async fn remove(
    State(state): State<AppState>,
    Json(request): Json<DeleteCustomerRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    request.validate()?;
    let repository = CustomerRepository::new(state.pool.clone());
    Ok(mutation_response(repository.delete(&request.customer_id).await))
}
