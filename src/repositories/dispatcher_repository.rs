use serde_json::Value;
use sqlx::PgPool;

use crate::models::dispatcher::{Dispatcher, DispatcherColumn};
use crate::query::Filter;
use crate::repositories::table::{execute_collapsed, TableRepository};
use crate::utils::errors::AppResult;

pub struct DispatcherRepository {
    table: TableRepository<Dispatcher>,
}

impl DispatcherRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            table: TableRepository::new(pool),
        }
    }

    pub async fn initialize(&self) -> bool {
        self.table.initialize().await
    }

    pub async fn insert(&self, dispatcher_id: &str, employee_id: &str) -> bool {
        let query = sqlx::query(
            "INSERT INTO dispatcher (dispatcher_id, employee_id) VALUES ($1, $2)",
        )
        .bind(dispatcher_id.to_string())
        .bind(employee_id.to_string());
        execute_collapsed(self.table.pool(), query, "dispatcher").await
    }

    pub async fn fetch_all(&self) -> Vec<Vec<Value>> {
        self.table.fetch_all().await
    }

    pub async fn select_where(
        &self,
        filter: &Filter<DispatcherColumn>,
    ) -> AppResult<Vec<Vec<Value>>> {
        self.table.select_where(filter).await
    }

    pub async fn update_attribute(
        &self,
        dispatcher_id: &str,
        attribute: &str,
        new_value: &str,
    ) -> AppResult<bool> {
        self.table.update_attribute(dispatcher_id, attribute, new_value).await
    }

    pub async fn delete(&self, dispatcher_id: &str) -> bool {
        self.table.delete(dispatcher_id).await
    }
}
