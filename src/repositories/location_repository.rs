use serde_json::Value;
use sqlx::PgPool;

use crate::models::location::{Location, LocationColumn};
use crate::query::Filter;
use crate::repositories::table::{execute_collapsed, TableRepository};
use crate::utils::errors::AppResult;

pub struct LocationRepository {
    table: TableRepository<Location>,
}

impl LocationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            table: TableRepository::new(pool),
        }
    }

    pub async fn initialize(&self) -> bool {
        self.table.initialize().await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn insert(
        &self,
        coordinate: &str,
        city: Option<String>,
        address: &str,
        capacity: Option<i32>,
        trucks_parked: Option<i32>,
        close_time: Option<String>,
        open_time: Option<String>,
    ) -> bool {
        let query = sqlx::query(
            "INSERT INTO location (coordinate, city, address, capacity, trucks_parked, \
             close_time, open_time) VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(coordinate.to_string())
        .bind(city)
        .bind(address.to_string())
        .bind(capacity)
        .bind(trucks_parked)
        .bind(close_time)
        .bind(open_time);
        execute_collapsed(self.table.pool(), query, "location").await
    }

    pub async fn fetch_all(&self) -> Vec<Vec<Value>> {
        self.table.fetch_all().await
    }

    pub async fn select_where(
        &self,
        filter: &Filter<LocationColumn>,
    ) -> AppResult<Vec<Vec<Value>>> {
        self.table.select_where(filter).await
    }

    pub async fn update_attribute(
        &self,
        coordinate: &str,
        attribute: &str,
        new_value: &str,
    ) -> AppResult<bool> {
        self.table.update_attribute(coordinate, attribute, new_value).await
    }

    pub async fn delete(&self, coordinate: &str) -> bool {
        self.table.delete(coordinate).await
    }
}
