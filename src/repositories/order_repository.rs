//! Repositorio de pedidos
//!
//! Además del contrato uniforme, el módulo de pedidos ofrece las consultas
//! analíticas: join pedidos-rutas-ubicaciones por distancia mínima,
//! proyección de columnas, conteo por cliente, salida más temprana por
//! fecha con más de un pedido y comparación contra el promedio de peso de
//! la propia fecha.

use serde_json::Value;
use sqlx::{PgPool, Row};
use tracing::warn;

use crate::models::order::{Order, OrderColumn};
use crate::query::{Column, Filter};
use crate::repositories::table::{execute_collapsed, TableRepository};
use crate::utils::errors::AppResult;

pub struct OrderRepository {
    table: TableRepository<Order>,
}

pub struct NewOrder {
    pub order_id: String,
    pub customer_id: String,
    pub weight: Option<f64>,
    pub route_id: String,
    pub order_date: Option<chrono::NaiveDate>,
    pub departure_time: Option<String>,
    pub arrival_time: Option<String>,
    pub invoice_id: Option<String>,
    pub dispatcher_id: Option<String>,
}

impl OrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            table: TableRepository::new(pool),
        }
    }

    pub async fn initialize(&self) -> bool {
        self.table.initialize().await
    }

    pub async fn insert(&self, order: NewOrder) -> bool {
        let query = sqlx::query(
            "INSERT INTO orders (order_id, customer_id, weight, route_id, order_date, \
             departure_time, arrival_time, invoice_id, dispatcher_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        )
        .bind(order.order_id)
        .bind(order.customer_id)
        .bind(order.weight)
        .bind(order.route_id)
        .bind(order.order_date)
        .bind(order.departure_time)
        .bind(order.arrival_time)
        .bind(order.invoice_id)
        .bind(order.dispatcher_id);
        execute_collapsed(self.table.pool(), query, "orders").await
    }

    pub async fn fetch_all(&self) -> Vec<Vec<Value>> {
        self.table.fetch_all().await
    }

    pub async fn select_where(&self, filter: &Filter<OrderColumn>) -> AppResult<Vec<Vec<Value>>> {
        self.table.select_where(filter).await
    }

    pub async fn project(&self, columns: &[OrderColumn]) -> AppResult<Vec<Vec<Value>>> {
        self.table.project(columns).await
    }

    pub async fn update_attribute(
        &self,
        order_id: &str,
        attribute: &str,
        new_value: &str,
    ) -> AppResult<bool> {
        self.table.update_attribute(order_id, attribute, new_value).await
    }

    pub async fn delete(&self, order_id: &str) -> bool {
        self.table.delete(order_id).await
    }

    /// Pedidos cuya ruta alcanza la distancia mínima, con la ubicación del
    /// origen de la ruta
    pub async fn long_haul(&self, min_distance: f64) -> Vec<Vec<Value>> {
        let result = sqlx::query(
            "SELECT o.order_id, o.customer_id, o.weight, \
             to_char(o.order_date, 'YYYY-MM-DD') AS order_date, \
             r.route_id, r.distance, r.origin, l.address \
             FROM orders o \
             JOIN route r ON o.route_id = r.route_id \
             JOIN location l ON r.origin = l.coordinate \
             WHERE r.distance >= $1 \
             ORDER BY r.distance DESC",
        )
        .bind(min_distance)
        .fetch_all(self.table.pool())
        .await;

        match result {
            Ok(rows) => rows
                .iter()
                .map(|row| {
                    vec![
                        text_value(row.try_get::<Option<String>, _>(0)),
                        text_value(row.try_get::<Option<String>, _>(1)),
                        real_value(row.try_get::<Option<f64>, _>(2)),
                        text_value(row.try_get::<Option<String>, _>(3)),
                        text_value(row.try_get::<Option<String>, _>(4)),
                        real_value(row.try_get::<Option<f64>, _>(5)),
                        text_value(row.try_get::<Option<String>, _>(6)),
                        text_value(row.try_get::<Option<String>, _>(7)),
                    ]
                })
                .collect(),
            Err(e) => {
                warn!("Long-haul join failed: {}", e);
                Vec::new()
            }
        }
    }

    /// Pedidos por cliente, descendente por conteo
    pub async fn count_by_customer(&self) -> Vec<Vec<Value>> {
        let result = sqlx::query(
            "SELECT customer_id, COUNT(*) AS order_count \
             FROM orders \
             GROUP BY customer_id \
             ORDER BY order_count DESC",
        )
        .fetch_all(self.table.pool())
        .await;

        match result {
            Ok(rows) => rows
                .iter()
                .map(|row| {
                    vec![
                        text_value(row.try_get::<Option<String>, _>(0)),
                        row.try_get::<i64, _>(1).map(Value::from).unwrap_or(Value::Null),
                    ]
                })
                .collect(),
            Err(e) => {
                warn!("Count by customer failed: {}", e);
                Vec::new()
            }
        }
    }

    /// Salida más temprana por fecha, sólo para fechas con más de un pedido
    pub async fn earliest_departure_per_busy_date(&self) -> Vec<Vec<Value>> {
        let result = sqlx::query(
            "SELECT to_char(order_date, 'YYYY-MM-DD') AS order_date, \
             MIN(departure_time) AS earliest_departure \
             FROM orders \
             WHERE order_date IS NOT NULL \
             GROUP BY order_date \
             HAVING COUNT(*) > 1 \
             ORDER BY order_date",
        )
        .fetch_all(self.table.pool())
        .await;

        match result {
            Ok(rows) => rows
                .iter()
                .map(|row| {
                    vec![
                        text_value(row.try_get::<Option<String>, _>(0)),
                        text_value(row.try_get::<Option<String>, _>(1)),
                    ]
                })
                .collect(),
            Err(e) => {
                warn!("Earliest departure query failed: {}", e);
                Vec::new()
            }
        }
    }

    /// Pedidos con peso igual o superior al promedio de su propia fecha
    pub async fn above_average_weight(&self) -> Vec<Vec<Value>> {
        let result = sqlx::query(
            "SELECT o.order_id, o.customer_id, o.weight, \
             to_char(o.order_date, 'YYYY-MM-DD') AS order_date \
             FROM orders o \
             WHERE o.weight >= (SELECT AVG(i.weight) FROM orders i \
                                WHERE i.order_date = o.order_date) \
             ORDER BY o.order_date, o.order_id",
        )
        .fetch_all(self.table.pool())
        .await;

        match result {
            Ok(rows) => rows
                .iter()
                .map(|row| {
                    vec![
                        text_value(row.try_get::<Option<String>, _>(0)),
                        text_value(row.try_get::<Option<String>, _>(1)),
                        real_value(row.try_get::<Option<f64>, _>(2)),
                        text_value(row.try_get::<Option<String>, _>(3)),
                    ]
                })
                .collect(),
            Err(e) => {
                warn!("Above-average-weight query failed: {}", e);
                Vec::new()
            }
        }
    }

    /// Resolver una lista de nombres de columna contra la allow-list
    pub fn parse_projection(raw: &str) -> AppResult<Vec<OrderColumn>> {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(OrderColumn::parse)
            .collect()
    }
}

fn text_value(value: Result<Option<String>, sqlx::Error>) -> Value {
    value.ok().flatten().map(Value::from).unwrap_or(Value::Null)
}

fn real_value(value: Result<Option<f64>, sqlx::Error>) -> Value {
    value.ok().flatten().map(Value::from).unwrap_or(Value::Null)
}
