use serde_json::Value;
use sqlx::PgPool;

use crate::models::customer::{Customer, CustomerColumn};
use crate::query::Filter;
use crate::repositories::table::{execute_collapsed, TableRepository};
use crate::utils::errors::AppResult;

pub struct CustomerRepository {
    table: TableRepository<Customer>,
}

impl CustomerRepository {
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
        customer_id: &str,
        phone_number: Option<String>,
        email: Option<String>,
        name: Option<String>,
    ) -> bool {
        let query = sqlx::query(
            "INSERT INTO customer (customer_id, phone_number, email, name) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(customer_id.to_string())
        .bind(phone_number)
        .bind(email)
        .bind(name);
        execute_collapsed(self.table.pool(), query, "customer").await
    }

    pub async fn fetch_all(&self) -> Vec<Vec<Value>> {
        self.table.fetch_all().await
    }

    pub async fn select_where(
        &self,
        filter: &Filter<CustomerColumn>,
    ) -> AppResult<Vec<Vec<Value>>> {
        self.table.select_where(filter).await
    }

    pub async fn update_attribute(
        &self,
        customer_id: &str,
        attribute: &str,
        new_value: &str,
    ) -> AppResult<bool> {
        self.table.update_attribute(customer_id, attribute, new_value).await
    }

    pub async fn delete(&self, customer_id: &str) -> bool {
        self.table.delete(customer_id).await
    }
}
