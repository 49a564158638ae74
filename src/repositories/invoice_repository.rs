use chrono::NaiveDate;
use serde_json::Value;
use sqlx::PgPool;

use crate::models::invoice::{Invoice, InvoiceColumn};
use crate::query::Filter;
use crate::repositories::table::{execute_collapsed, TableRepository};
use crate::utils::errors::AppResult;

pub struct InvoiceRepository {
    table: TableRepository<Invoice>,
}

impl InvoiceRepository {
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
        invoice_id: &str,
        issue_date: Option<NaiveDate>,
        status: Option<String>,
        order_id: Option<String>,
    ) -> bool {
        let query = sqlx::query(
            "INSERT INTO invoice (invoice_id, issue_date, status, order_id) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(invoice_id.to_string())
        .bind(issue_date)
        .bind(status)
        .bind(order_id);
        execute_collapsed(self.table.pool(), query, "invoice").await
    }

    pub async fn fetch_all(&self) -> Vec<Vec<Value>> {
        self.table.fetch_all().await
    }

    pub async fn select_where(&self, filter: &Filter<InvoiceColumn>) -> AppResult<Vec<Vec<Value>>> {
        self.table.select_where(filter).await
    }

    pub async fn update_attribute(
        &self,
        invoice_id: &str,
        attribute: &str,
        new_value: &str,
    ) -> AppResult<bool> {
        self.table.update_attribute(invoice_id, attribute, new_value).await
    }

    pub async fn delete(&self, invoice_id: &str) -> bool {
        self.table.delete(invoice_id).await
    }
}
