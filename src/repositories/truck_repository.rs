use serde_json::Value;
use sqlx::PgPool;

use crate::models::truck::{Truck, TruckColumn};
use crate::query::Filter;
use crate::repositories::table::{execute_collapsed, TableRepository};
use crate::utils::errors::AppResult;

pub struct TruckRepository {
    table: TableRepository<Truck>,
}

impl TruckRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            table: TableRepository::new(pool),
        }
    }

    pub async fn initialize(&self) -> bool {
        self.table.initialize().await
    }

    pub async fn insert(
        &self,
        plate_number: &str,
        model: Option<String>,
        mileage: Option<f64>,
        status: Option<String>,
        parked_at: Option<String>,
    ) -> bool {
        let query = sqlx::query(
            "INSERT INTO truck (plate_number, model, mileage, status, parked_at) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(plate_number.to_string())
        .bind(model)
        .bind(mileage)
        .bind(status)
        .bind(parked_at);
        execute_collapsed(self.table.pool(), query, "truck").await
    }

    pub async fn fetch_all(&self) -> Vec<Vec<Value>> {
        self.table.fetch_all().await
    }

    pub async fn select_where(&self, filter: &Filter<TruckColumn>) -> AppResult<Vec<Vec<Value>>> {
        self.table.select_where(filter).await
    }

    pub async fn update_attribute(
        &self,
        plate_number: &str,
        attribute: &str,
        new_value: &str,
    ) -> AppResult<bool> {
        self.table.update_attribute(plate_number, attribute, new_value).await
    }

    pub async fn delete(&self, plate_number: &str) -> bool {
        self.table.delete(plate_number).await
    }
}
