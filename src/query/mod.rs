//! Modelo tipado de consultas
//!
//! Reemplaza los fragmentos SQL de texto libre (predicados, proyecciones,
//! nombres de atributo) por un modelo de expresiones con allow-list:
//! columnas enumeradas por tabla, operadores enumerados y argumentos
//! tipados que siempre se emiten como SQL parametrizado.

pub mod filter;

pub use filter::{Argument, Column, ColumnKind, Comparison, Condition, Connective, Filter};
