//! Router de pedidos: contrato uniforme más las consultas analíticas

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde_json::Value;
use validator::Validate;

use crate::dto::common::FilterParams;
use crate::dto::order_dto::{
    DeleteOrderRequest, InsertOrderRequest, LongHaulParams, ProjectionParams, UpdateOrderRequest,
};
use crate::models::order::OrderColumn;
use crate::query::{Condition, Filter};
use crate::repositories::order_repository::{NewOrder, OrderRepository};
use crate::routes::{data_response, mutation_response};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_order_router() -> Router<AppState> {
    Router::new()
        .route("/initiate", post(initiate))
        .route("/", post(insert).get(fetch_all).delete(remove))
        .route("/update", post(update))
        .route("/filter", get(filter))
        .route("/long-haul", get(long_haul))
        .route("/projection", get(projection))
        .route("/count-by-customer", get(count_by_customer))
        .route("/earliest-departures", get(earliest_departures))
        .route("/above-average-weight", get(above_average_weight))
}

async fn initiate(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let repository = OrderRepository::new(state.pool.clone());
    mutation_response(repository.initialize().await)
}

async fn insert(
    State(state): State<AppState>,
    Json(request): Json<InsertOrderRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    request.validate()?;

    // La fecha cruza la frontera como texto ISO y se parsea aquí
    let order_date = match request.order_date.as_deref() {
        Some(raw) => Some(NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
            AppError::BadRequest(format!("'{}' is not a YYYY-MM-DD date", raw))
        })?),
        None => None,
    };

    let repository = OrderRepository::new(state.pool.clone());
    let inserted = repository
        .insert(NewOrder {
            order_id: request.order_id,
            customer_id: request.customer_id,
            weight: request.weight,
            route_id: request.route_id,
            order_date,
            departure_time: request.departure_time,
            arrival_time: request.arrival_time,
            invoice_id: request.invoice_id,
            dispatcher_id: request.dispatcher_id,
        })
        .await;
    Ok(mutation_response(inserted))
}

async fn fetch_all(State(state): State<AppState>) -> Json<Value> {
    let repository = OrderRepository::new(state.pool.clone());
    data_response(repository.fetch_all().await)
}

async fn filter(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Result<Json<Value>, AppError> {
    let condition = Condition::<OrderColumn>::parse(&params.column, &params.op, &params.value)?;
    let repository = OrderRepository::new(state.pool.clone());
    let rows = repository.select_where(&Filter::new(condition)).await?;
    Ok(data_response(rows))
}

async fn update(
    State(state): State<AppState>,
    Json(request): Json<UpdateOrderRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    request.validate()?;
    let repository = OrderRepository::new(state.pool.clone());
    let updated = repository
        .update_attribute(&request.order_id, &request.attribute, &request.new_value)
        .await?;
    Ok(mutation_response(updated))
}

async fn remove(
    State(state): State<AppState>,
    Json(request): Json<DeleteOrderRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    request.validate()?;
    let repository = OrderRepository::new(state.pool.clone());
    Ok(mutation_response(repository.delete(&request.order_id).await))
}

async fn long_haul(
    State(state): State<AppState>,
    Query(params): Query<LongHaulParams>,
) -> Json<Value> {
    let repository = OrderRepository::new(state.pool.clone());
    data_response(repository.long_haul(params.min_distance).await)
}

async fn projection(
    State(state): State<AppState>,
    Query(params): Query<ProjectionParams>,
) -> Result<Json<Value>, AppError> {
    let columns = OrderRepository::parse_projection(&params.columns)?;
    let repository = OrderRepository::new(state.pool.clone());
    let rows = repository.project(&columns).await?;
    Ok(data_response(rows))
}

async fn count_by_customer(State(state): State<AppState>) -> Json<Value> {
    let repository = OrderRepository::new(state.pool.clone());
    data_response(repository.count_by_customer().await)
}

async fn earliest_departures(State(state): State<AppState>) -> Json<Value> {
    let repository = OrderRepository::new(state.pool.clone());
    data_response(repository.earliest_departure_per_busy_date().await)
}

async fn above_average_weight(State(state): State<AppState>) -> Json<Value> {
    let repository = OrderRepository::new(state.pool.clone());
    data_response(repository.above_average_weight().await)
}
