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
use crate::dto::invoice_dto::{DeleteInvoiceRequest, InsertInvoiceRequest, UpdateInvoiceRequest};
use crate::models::invoice::InvoiceColumn;
use crate::query::{Condition, Filter};
use crate::repositories::invoice_repository::InvoiceRepository;
use crate::routes::{data_response, mutation_response};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_invoice_router() -> Router<AppState> {
    Router::new()
        .route("/initiate", post(initiate))
        .route("/", post(insert).get(fetch_all).delete(remove))
        .route("/update", post(update))
        .route("/filter", get(filter))
}

async fn initiate(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let repository = InvoiceRepository::new(state.pool.clone());
    mutation_response(repository.initialize().await)
}

async fn insert(
    State(state): State<AppState>,
    Json(request): Json<InsertInvoiceRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    request.validate()?;
    let issue_date = match request.issue_date.as_deref() {
        Some(raw) => Some(NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
            AppError::BadRequest(format!("'{}' is not a YYYY-MM-DD date", raw))
        })?),
        None => None,
    };
    let repository = InvoiceRepository::new(state.pool.clone());
    let inserted = repository
        .insert(
            &request.invoice_id,
            issue_date,
            request.status,
            request.order_id,
        )
        .await;
    Ok(mutation_response(inserted))
}

async fn fetch_all(State(state): State<AppState>) -> Json<Value> {
    let repository = InvoiceRepository::new(state.pool.clone());
    data_response(repository.fetch_all().await)
}

async fn filter(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Result<Json<Value>, AppError> {
    let condition = Condition::<InvoiceColumn>::parse(&params.column, &params.op, &params.value)?;
    let repository = InvoiceRepository::new(state.pool.clone());
    let rows = repository.select_where(&Filter::new(condition)).await?;
    Ok(data_response(rows))
}

async fn update(
    State(state): State<AppState>,
    Json(request): Json<UpdateInvoiceRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    request.validate()?;
    let repository = InvoiceRepository::new(state.pool.clone());
    let updated = repository
        .update_attribute(&request.invoice_id, &request.attribute, &request.new_value)
        .await?;
    Ok(mutation_response(updated))
}

async fn remove(
    State(state): State<AppState>,
    Json(request): Json<DeleteInvoiceRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    request.validate()?;
    let repository = InvoiceRepository::new(state.pool.clone());
    Ok(mutation_response(repository.delete(&request.invoice_id).await))
}
