use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use validator::Validate;

use crate::dto::common::FilterParams;
use crate::dto::location_dto::{
    DeleteLocationRequest, InsertLocationRequest, UpdateLocationRequest,
};
use crate::models::location::LocationColumn;
use crate::query::{Condition, Filter};
use crate::repositories::location_repository::LocationRepository;
use crate::routes::{data_response, mutation_response};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_location_router() -> Router<AppState> {
    Router::new()
        .route("/initiate", post(initiate))
        .route("/", post(insert).get(fetch_all).delete(remove))
        .route("/update", post(update))
        .route("/filter", get(filter))
}

async fn initiate(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let repository = LocationRepository::new(state.pool.clone());
    mutation_response(repository.initialize().await)
}

async fn insert(
    State(state): State<AppState>,
    Json(request): Json<InsertLocationRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    request.validate()?;
    let repository = LocationRepository::new(state.pool.clone());
    let inserted = repository
        .insert(
            &request.coordinate,
            request.city,
            &request.address,
            request.capacity,
            request.trucks_parked,
            request.close_time,
            request.open_time,
        )
        .await;
    Ok(mutation_response(inserted))
}

async fn fetch_all(State(state): State<AppState>) -> Json<Value> {
    let repository = LocationRepository::new(state.pool.clone());
    data_response(repository.fetch_all().await)
}

async fn filter(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Result<Json<Value>, AppError> {
    let condition = Condition::<LocationColumn>::parse(&params.column, &params.op, &params.value)?;
    let repository = LocationRepository::new(state.pool.clone());
    let rows = repository.select_where(&Filter::new(condition)).await?;
    Ok(data_response(rows))
}

async fn update(
    State(state): State<AppState>,
    Json(request): Json<UpdateLocationRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    request.validate()?;
    let repository = LocationRepository::new(state.pool.clone());
    let updated = repository
        .update_attribute(&request.coordinate, &request.attribute, &request.new_value)
        .await?;
    Ok(mutation_response(updated))
}

async fn remove(
    State(state): State<AppState>,
    Json(request): Json<DeleteLocationRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    request.validate()?;
    let repository = LocationRepository::new(state.pool.clone());
    Ok(mutation_response(repository.delete(&request.coordinate).await))
}
