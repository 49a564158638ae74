use serde_json::Value;
use sqlx::PgPool;

use crate::models::route::{Route, RouteColumn};
use crate::query::Filter;
use crate::repositories::table::{execute_collapsed, TableRepository};
use crate::utils::errors::AppResult;

pub struct RouteRepository {
    table: TableRepository<Route>,
}

impl RouteRepository {
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
        route_id: &str,
        origin: &str,
        destination: &str,
        distance: Option<f64>,
    ) -> bool {
        let query = sqlx::query(
            "INSERT INTO route (route_id, origin, destination, distance) VALUES ($1, $2, $3, $4)",
        )
        .bind(route_id.to_string())
        .bind(origin.to_string())
        .bind(destination.to_string())
        .bind(distance);
        execute_collapsed(self.table.pool(), query, "route").await
    }

    pub async fn fetch_all(&self) -> Vec<Vec<Value>> {
        self.table.fetch_all().await
    }

    pub async fn select_where(
        &self,
        filter: &Filter<RouteColumn>,
    ) -> AppResult<Vec<Vec<Value>>> {
        self.table.select_where(filter).await
    }

    pub async fn update_attribute(
        &self,
        route_id: &str,
        attribute: &str,
        new_value: &str,
    ) -> AppResult<bool> {
        self.table.update_attribute(route_id, attribute, new_value).await
    }

    /// Borra la ruta; los pedidos que la referencian caen en cascada
    pub async fn delete(&self, route_id: &str) -> bool {
        self.table.delete(route_id).await
    }
}
