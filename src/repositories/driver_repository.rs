use serde_json::Value;
use sqlx::PgPool;

use crate::models::driver::{Driver, DriverColumn};
use crate::query::Filter;
use crate::repositories::table::{execute_collapsed, TableRepository};
use crate::utils::errors::AppResult;

pub struct DriverRepository {
    table: TableRepository<Driver>,
}

impl DriverRepository {
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
        employee_id: &str,
        license_id: Option<String>,
        hours_driven: Option<f64>,
    ) -> bool {
        let query = sqlx::query(
            "INSERT INTO driver (employee_id, license_id, hours_driven) VALUES ($1, $2, $3)",
        )
        .bind(employee_id.to_string())
        .bind(license_id)
        .bind(hours_driven);
        execute_collapsed(self.table.pool(), query, "driver").await
    }

    pub async fn fetch_all(&self) -> Vec<Vec<Value>> {
        self.table.fetch_all().await
    }

    pub async fn select_where(&self, filter: &Filter<DriverColumn>) -> AppResult<Vec<Vec<Value>>> {
        self.table.select_where(filter).await
    }

    pub async fn update_attribute(
        &self,
        employee_id: &str,
        attribute: &str,
        new_value: &str,
    ) -> AppResult<bool> {
        self.table.update_attribute(employee_id, attribute, new_value).await
    }

    pub async fn delete(&self, employee_id: &str) -> bool {
        self.table.delete(employee_id).await
    }
}
