//! Capa genérica de acceso a tablas
//!
//! Un único repositorio parametrizado por los metadatos de [`Table`] cubre
//! el contrato uniforme de cada entidad: initialize (drop-create-seed),
//! lectura fija y filtrada, proyección, update de un atributo y delete por
//! clave primaria. Los errores de mutación se colapsan a `false` y los de
//! lectura fija a secuencia vacía; las rutas de filtro/proyección/update
//! tipadas sí propagan el error con mensaje.

use std::marker::PhantomData;

use serde_json::Value;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{PgPool, Postgres, Row};
use tracing::warn;

use crate::models::Table;
use crate::query::{Argument, Column, ColumnKind, Filter};
use crate::utils::errors::{AppError, AppResult};

pub struct TableRepository<T: Table> {
    pool: PgPool,
    _table: PhantomData<T>,
}

impl<T: Table> TableRepository<T> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _table: PhantomData,
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Drop best-effort de dependientes y de la propia tabla, CREATE y
    /// semillas. Idempotente: dos llamadas seguidas dejan el mismo estado.
    pub async fn initialize(&self) -> bool {
        for dependent in T::DROP_DEPENDENTS {
            let drop = format!("DROP TABLE IF EXISTS {}", dependent);
            if let Err(e) = sqlx::query(&drop).execute(&self.pool).await {
                // La tabla puede no existir todavía; seguimos igual
                warn!("Dropping dependent {} of {}: {}", dependent, T::NAME, e);
            }
        }

        let drop = format!("DROP TABLE IF EXISTS {}", T::NAME);
        if let Err(e) = sqlx::query(&drop).execute(&self.pool).await {
            warn!("Dropping {}: {}", T::NAME, e);
        }

        if let Err(e) = sqlx::query(T::CREATE).execute(&self.pool).await {
            warn!("Creating {}: {}", T::NAME, e);
            return false;
        }

        for seed in T::SEED {
            if let Err(e) = sqlx::query(seed).execute(&self.pool).await {
                warn!("Seeding {}: {}", T::NAME, e);
                return false;
            }
        }

        true
    }

    /// Proyección fija de todas las columnas en orden de esquema
    pub async fn fetch_all(&self) -> Vec<Vec<Value>> {
        let sql = format!("SELECT {} FROM {}", T::select_list(), T::NAME);
        match sqlx::query(&sql).fetch_all(&self.pool).await {
            Ok(rows) => match rows
                .iter()
                .map(|row| row_values(row, T::Column::all()))
                .collect()
            {
                Ok(values) => values,
                Err(e) => {
                    warn!("Decoding rows of {}: {}", T::NAME, e);
                    Vec::new()
                }
            },
            Err(e) => {
                warn!("Fetching {}: {}", T::NAME, e);
                Vec::new()
            }
        }
    }

    /// SELECT filtrado por un [`Filter`] tipado y parametrizado
    pub async fn select_where(&self, filter: &Filter<T::Column>) -> AppResult<Vec<Vec<Value>>> {
        let sql = format!(
            "SELECT {} FROM {} WHERE {}",
            T::select_list(),
            T::NAME,
            filter.where_clause(1)
        );
        let rows = filter.bind_all(sqlx::query(&sql)).fetch_all(&self.pool).await?;
        rows.iter().map(|row| row_values(row, T::Column::all())).collect()
    }

    /// Proyección de columnas elegidas por el caller (ya resueltas contra
    /// la allow-list)
    pub async fn project(&self, columns: &[T::Column]) -> AppResult<Vec<Vec<Value>>> {
        if columns.is_empty() {
            return Err(AppError::BadRequest(
                "Projection requires at least one column".to_string(),
            ));
        }
        let list = columns
            .iter()
            .map(|c| c.select_expr())
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!("SELECT {} FROM {}", list, T::NAME);
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        rows.iter().map(|row| row_values(row, columns)).collect()
    }

    /// `UPDATE t SET <col> = $1 WHERE <clave> = $2`, con el valor
    /// coercionado al tipo de la columna (las fechas parsean `YYYY-MM-DD`)
    pub async fn update_attribute(
        &self,
        key: &str,
        attribute: &str,
        new_value: &str,
    ) -> AppResult<bool> {
        let column = T::Column::parse(attribute)?;
        let argument = Argument::coerce(column.kind(), new_value)?;
        let sql = format!(
            "UPDATE {} SET {} = $1 WHERE {} = $2",
            T::NAME,
            column.name(),
            T::KEY.name()
        );
        let result = argument
            .bind_to(sqlx::query(&sql))
            .bind(key.to_string())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// DELETE por clave primaria; `true` sólo si borró al menos una fila
    pub async fn delete(&self, key: &str) -> bool {
        let sql = format!("DELETE FROM {} WHERE {} = $1", T::NAME, T::KEY.name());
        execute_collapsed(&self.pool, sqlx::query(&sql).bind(key.to_string()), T::NAME).await
    }
}

/// Ejecutar una mutación colapsando cualquier error del driver a `false`
pub async fn execute_collapsed(
    pool: &PgPool,
    query: Query<'_, Postgres, PgArguments>,
    context: &str,
) -> bool {
    match query.execute(pool).await {
        Ok(result) => result.rows_affected() > 0,
        Err(e) => {
            warn!("Mutation on {} failed: {}", context, e);
            false
        }
    }
}

/// Decodificar una fila a valores JSON en el orden de las columnas pedidas
pub fn row_values<C: Column>(row: &PgRow, columns: &[C]) -> AppResult<Vec<Value>> {
    columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            let value = match column.kind() {
                // Las fechas ya vienen como texto ISO por el select_expr
                ColumnKind::Text | ColumnKind::Date => row
                    .try_get::<Option<String>, _>(i)
                    .map_err(AppError::from)?
                    .map(Value::from),
                ColumnKind::Integer => row
                    .try_get::<Option<i32>, _>(i)
                    .map_err(AppError::from)?
                    .map(Value::from),
                ColumnKind::Real => row
                    .try_get::<Option<f64>, _>(i)
                    .map_err(AppError::from)?
                    .map(Value::from),
            };
            Ok(value.unwrap_or(Value::Null))
        })
        .collect()
}
