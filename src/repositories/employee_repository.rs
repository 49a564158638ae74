use serde_json::Value;
use sqlx::PgPool;

use crate::models::employee::{Employee, EmployeeColumn};
use crate::query::Filter;
use crate::repositories::table::{execute_collapsed, TableRepository};
use crate::utils::errors::AppResult;

pub struct EmployeeRepository {
    table: TableRepository<Employee>,
}

impl EmployeeRepository {
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
        sin: Option<String>,
        phone_number: Option<String>,
        email: Option<String>,
        work_location: Option<String>,
    ) -> bool {
        let query = sqlx::query(
            "INSERT INTO employee (employee_id, sin, phone_number, email, work_location) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(employee_id.to_string())
        .bind(sin)
        .bind(phone_number)
        .bind(email)
        .bind(work_location);
        execute_collapsed(self.table.pool(), query, "employee").await
    }

    pub async fn fetch_all(&self) -> Vec<Vec<Value>> {
        self.table.fetch_all().await
    }

    pub async fn select_where(
        &self,
        filter: &Filter<EmployeeColumn>,
    ) -> AppResult<Vec<Vec<Value>>> {
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
