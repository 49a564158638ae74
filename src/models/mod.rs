//! Esquema relacional del sistema logístico
//!
//! Cada entidad define su enum de columnas permitidas, su DDL y sus filas
//! semilla. El trait [`Table`] es el contrato que consume la capa genérica
//! de repositorios.

pub mod assignment;
pub mod customer;
pub mod dispatcher;
pub mod driver;
pub mod employee;
pub mod invoice;
pub mod location;
pub mod order;
pub mod route;
pub mod truck;

use crate::query::Column;

/// Metadatos de esquema de una tabla concreta
pub trait Table {
    /// Enum de columnas de la tabla
    type Column: Column;

    /// Nombre SQL de la tabla
    const NAME: &'static str;

    /// Columna de clave primaria (las tablas de asociación usan claves
    /// compuestas y resuelven sus borrados en su propio repositorio)
    const KEY: Self::Column;

    /// Sentencia CREATE TABLE
    const CREATE: &'static str;

    /// Tablas dependientes a soltar antes que esta (drop best-effort)
    const DROP_DEPENDENTS: &'static [&'static str];

    /// Filas semilla insertadas tras crear la tabla
    const SEED: &'static [&'static str];

    /// Lista SELECT con todas las columnas en orden de esquema
    fn select_list() -> String {
        Self::Column::all()
            .iter()
            .map(|c| c.select_expr())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Define un enum de columnas y su impl de [`Column`]
macro_rules! table_columns {
    ($(#[$meta:meta])* $enum_name:ident { $($variant:ident => $name:literal, $kind:ident;)+ }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $enum_name {
            $($variant),+
        }

        impl $crate::query::Column for $enum_name {
            fn name(self) -> &'static str {
                match self { $(Self::$variant => $name),+ }
            }

            fn kind(self) -> $crate::query::ColumnKind {
                match self { $(Self::$variant => $crate::query::ColumnKind::$kind),+ }
            }

            fn all() -> &'static [Self] {
                &[$(Self::$variant),+]
            }
        }
    };
}

pub(crate) use table_columns;
