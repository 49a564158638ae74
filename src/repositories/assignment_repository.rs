//! Repositorio de las tablas de asociación
//!
//! `driver_drives` y `assigned` tienen clave primaria compuesta, así que
//! sus borrados y updates se arman aquí con la clave completa en lugar de
//! pasar por el delete genérico de una sola columna.

use serde_json::Value;
use sqlx::PgPool;

use crate::models::assignment::{Assigned, AssignedColumn, DriverDrives, DriverDrivesColumn};
use crate::query::{Argument, Column, Filter};
use crate::repositories::table::{execute_collapsed, TableRepository};
use crate::utils::errors::AppResult;

pub struct AssignmentRepository {
    driver_drives: TableRepository<DriverDrives>,
    assigned: TableRepository<Assigned>,
    pool: PgPool,
}

impl AssignmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            driver_drives: TableRepository::new(pool.clone()),
            assigned: TableRepository::new(pool.clone()),
            pool,
        }
    }

    // ---- driver_drives ----

    pub async fn initialize_driver_drives(&self) -> bool {
        self.driver_drives.initialize().await
    }

    pub async fn insert_driver_drives(&self, plate_number: &str, employee_id: &str) -> bool {
        let query = sqlx::query(
            "INSERT INTO driver_drives (plate_number, employee_id) VALUES ($1, $2)",
        )
        .bind(plate_number.to_string())
        .bind(employee_id.to_string());
        execute_collapsed(&self.pool, query, "driver_drives").await
    }

    pub async fn fetch_all_driver_drives(&self) -> Vec<Vec<Value>> {
        self.driver_drives.fetch_all().await
    }

    pub async fn select_driver_drives(
        &self,
        filter: &Filter<DriverDrivesColumn>,
    ) -> AppResult<Vec<Vec<Value>>> {
        self.driver_drives.select_where(filter).await
    }

    pub async fn delete_driver_drives(&self, plate_number: &str, employee_id: &str) -> bool {
        let query = sqlx::query(
            "DELETE FROM driver_drives WHERE plate_number = $1 AND employee_id = $2",
        )
        .bind(plate_number.to_string())
        .bind(employee_id.to_string());
        execute_collapsed(&self.pool, query, "driver_drives").await
    }

    pub async fn update_driver_drives(
        &self,
        plate_number: &str,
        employee_id: &str,
        attribute: &str,
        new_value: &str,
    ) -> AppResult<bool> {
        let column = DriverDrivesColumn::parse(attribute)?;
        let argument = Argument::coerce(column.kind(), new_value)?;
        let sql = format!(
            "UPDATE driver_drives SET {} = $1 WHERE plate_number = $2 AND employee_id = $3",
            column.name()
        );
        let result = argument
            .bind_to(sqlx::query(&sql))
            .bind(plate_number.to_string())
            .bind(employee_id.to_string())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // ---- assigned ----

    pub async fn initialize_assigned(&self) -> bool {
        self.assigned.initialize().await
    }

    pub async fn insert_assigned(
        &self,
        plate_number: &str,
        employee_id: &str,
        order_id: &str,
    ) -> bool {
        let query = sqlx::query(
            "INSERT INTO assigned (plate_number, employee_id, order_id) VALUES ($1, $2, $3)",
        )
        .bind(plate_number.to_string())
        .bind(employee_id.to_string())
        .bind(order_id.to_string());
        execute_collapsed(&self.pool, query, "assigned").await
    }

    pub async fn fetch_all_assigned(&self) -> Vec<Vec<Value>> {
        self.assigned.fetch_all().await
    }

    pub async fn select_assigned(
        &self,
        filter: &Filter<AssignedColumn>,
    ) -> AppResult<Vec<Vec<Value>>> {
        self.assigned.select_where(filter).await
    }

    pub async fn delete_assigned(
        &self,
        plate_number: &str,
        employee_id: &str,
        order_id: &str,
    ) -> bool {
        let query = sqlx::query(
            "DELETE FROM assigned \
             WHERE plate_number = $1 AND employee_id = $2 AND order_id = $3",
        )
        .bind(plate_number.to_string())
        .bind(employee_id.to_string())
        .bind(order_id.to_string());
        execute_collapsed(&self.pool, query, "assigned").await
    }
}
