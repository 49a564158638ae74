//! Filtros parametrizados sobre columnas permitidas
//!
//! Cada tabla expone un enum de columnas que implementa [`Column`]. Un
//! [`Filter`] se construye únicamente a partir de esas columnas, un
//! [`Comparison`] enumerado y un [`Argument`] coercionado al tipo de la
//! columna, y emite una cláusula WHERE con placeholders `$n` — nunca
//! concatena texto del caller dentro del SQL.

use chrono::NaiveDate;
use sqlx::postgres::PgArguments;
use sqlx::query::Query;
use sqlx::Postgres;

use crate::utils::errors::{AppError, AppResult};

/// Tipo de dato de una columna, usado para coercionar argumentos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Integer,
    Real,
    Date,
}

/// Columna permitida de una tabla concreta
pub trait Column: Copy + Eq + 'static {
    /// Nombre SQL de la columna (snake_case)
    fn name(self) -> &'static str;

    /// Tipo de dato de la columna
    fn kind(self) -> ColumnKind;

    /// Todas las columnas de la tabla, en orden de esquema
    fn all() -> &'static [Self];

    /// Resolver un nombre enviado por el caller contra la allow-list.
    /// Acepta tanto el nombre SQL (`order_date`) como la forma camelCase
    /// del frontend (`orderDate`).
    fn parse(raw: &str) -> AppResult<Self> {
        let wanted = normalize(raw);
        Self::all()
            .iter()
            .copied()
            .find(|c| normalize(c.name()) == wanted)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown column '{}'", raw)))
    }

    /// Expresión SELECT para la columna. Las fechas siempre cruzan la
    /// frontera como texto `YYYY-MM-DD`.
    fn select_expr(self) -> String {
        match self.kind() {
            ColumnKind::Date => format!("to_char({0}, 'YYYY-MM-DD') AS {0}", self.name()),
            _ => self.name().to_string(),
        }
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Operadores de comparación permitidos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    Like,
}

impl Comparison {
    pub fn symbol(self) -> &'static str {
        match self {
            Comparison::Eq => "=",
            Comparison::Ne => "<>",
            Comparison::Lt => "<",
            Comparison::Le => "<=",
            Comparison::Gt => ">",
            Comparison::Ge => ">=",
            Comparison::Like => "LIKE",
        }
    }

    pub fn parse(raw: &str) -> AppResult<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "=" | "eq" => Ok(Comparison::Eq),
            "<>" | "!=" | "ne" => Ok(Comparison::Ne),
            "<" | "lt" => Ok(Comparison::Lt),
            "<=" | "le" => Ok(Comparison::Le),
            ">" | "gt" => Ok(Comparison::Gt),
            ">=" | "ge" => Ok(Comparison::Ge),
            "like" => Ok(Comparison::Like),
            other => Err(AppError::BadRequest(format!(
                "Unknown comparison operator '{}'",
                other
            ))),
        }
    }
}

/// Argumento ya coercionado al tipo de su columna
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    Text(String),
    Integer(i32),
    Real(f64),
    Date(NaiveDate),
}

impl Argument {
    /// Coercionar un valor textual del caller según el tipo de la columna
    pub fn coerce(kind: ColumnKind, raw: &str) -> AppResult<Self> {
        match kind {
            ColumnKind::Text => Ok(Argument::Text(raw.to_string())),
            ColumnKind::Integer => raw
                .trim()
                .parse::<i32>()
                .map(Argument::Integer)
                .map_err(|_| AppError::BadRequest(format!("'{}' is not an integer", raw))),
            ColumnKind::Real => raw
                .trim()
                .parse::<f64>()
                .map(Argument::Real)
                .map_err(|_| AppError::BadRequest(format!("'{}' is not a number", raw))),
            ColumnKind::Date => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                .map(Argument::Date)
                .map_err(|_| {
                    AppError::BadRequest(format!("'{}' is not a YYYY-MM-DD date", raw))
                }),
        }
    }

    /// Enlazar el argumento al siguiente placeholder de la query
    pub fn bind_to<'q>(
        &self,
        query: Query<'q, Postgres, PgArguments>,
    ) -> Query<'q, Postgres, PgArguments> {
        match self {
            Argument::Text(s) => query.bind(s.clone()),
            Argument::Integer(i) => query.bind(*i),
            Argument::Real(r) => query.bind(*r),
            Argument::Date(d) => query.bind(*d),
        }
    }
}

/// Una comparación columna-operador-argumento
#[derive(Debug, Clone)]
pub struct Condition<C: Column> {
    pub column: C,
    pub comparison: Comparison,
    pub argument: Argument,
}

impl<C: Column> Condition<C> {
    /// Construir una condición validando columna, operador y valor
    pub fn parse(column: &str, op: &str, value: &str) -> AppResult<Self> {
        let column = C::parse(column)?;
        let comparison = Comparison::parse(op)?;
        if comparison == Comparison::Like && column.kind() != ColumnKind::Text {
            return Err(AppError::BadRequest(format!(
                "LIKE is only valid on text columns, '{}' is not one",
                column.name()
            )));
        }
        let argument = Argument::coerce(column.kind(), value)?;
        Ok(Self {
            column,
            comparison,
            argument,
        })
    }
}

/// Conector lógico entre condiciones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connective {
    And,
    Or,
}

impl Connective {
    fn keyword(self) -> &'static str {
        match self {
            Connective::And => "AND",
            Connective::Or => "OR",
        }
    }
}

/// Conjunto de condiciones unidas por AND/OR
#[derive(Debug, Clone)]
pub struct Filter<C: Column> {
    first: Condition<C>,
    rest: Vec<(Connective, Condition<C>)>,
}

impl<C: Column> Filter<C> {
    pub fn new(condition: Condition<C>) -> Self {
        Self {
            first: condition,
            rest: Vec::new(),
        }
    }

    pub fn and(mut self, condition: Condition<C>) -> Self {
        self.rest.push((Connective::And, condition));
        self
    }

    pub fn or(mut self, condition: Condition<C>) -> Self {
        self.rest.push((Connective::Or, condition));
        self
    }

    /// Cláusula WHERE con placeholders a partir de `first_placeholder`
    pub fn where_clause(&self, first_placeholder: usize) -> String {
        let mut clause = format!(
            "{} {} ${}",
            self.first.column.name(),
            self.first.comparison.symbol(),
            first_placeholder
        );
        for (i, (connective, condition)) in self.rest.iter().enumerate() {
            clause.push_str(&format!(
                " {} {} {} ${}",
                connective.keyword(),
                condition.column.name(),
                condition.comparison.symbol(),
                first_placeholder + 1 + i
            ));
        }
        clause
    }

    /// Argumentos en el mismo orden que los placeholders
    pub fn arguments(&self) -> impl Iterator<Item = &Argument> {
        std::iter::once(&self.first.argument).chain(self.rest.iter().map(|(_, c)| &c.argument))
    }

    /// Enlazar todos los argumentos del filtro a la query
    pub fn bind_all<'q>(
        &self,
        mut query: Query<'q, Postgres, PgArguments>,
    ) -> Query<'q, Postgres, PgArguments> {
        for argument in self.arguments() {
            query = argument.bind_to(query);
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::order::OrderColumn;
    use crate::models::route::RouteColumn;

    #[test]
    fn parse_accepts_camel_case_and_snake_case() {
        assert_eq!(
            OrderColumn::parse("orderDate").unwrap(),
            OrderColumn::OrderDate
        );
        assert_eq!(
            OrderColumn::parse("order_date").unwrap(),
            OrderColumn::OrderDate
        );
    }

    #[test]
    fn parse_rejects_unknown_columns() {
        assert!(OrderColumn::parse("weight; DROP TABLE orders").is_err());
        assert!(RouteColumn::parse("not_a_column").is_err());
    }

    #[test]
    fn comparison_parses_symbols_and_words() {
        assert_eq!(Comparison::parse(">=").unwrap(), Comparison::Ge);
        assert_eq!(Comparison::parse("ne").unwrap(), Comparison::Ne);
        assert!(Comparison::parse("between").is_err());
    }

    #[test]
    fn argument_coercion_respects_column_kind() {
        assert_eq!(
            Argument::coerce(ColumnKind::Integer, "42").unwrap(),
            Argument::Integer(42)
        );
        assert!(Argument::coerce(ColumnKind::Integer, "abc").is_err());
        assert!(Argument::coerce(ColumnKind::Date, "2025-13-40").is_err());
        assert_eq!(
            Argument::coerce(ColumnKind::Date, "2025-04-22").unwrap(),
            Argument::Date(NaiveDate::from_ymd_opt(2025, 4, 22).unwrap())
        );
    }

    #[test]
    fn like_is_rejected_on_non_text_columns() {
        assert!(Condition::<OrderColumn>::parse("weight", "like", "1").is_err());
        assert!(Condition::<OrderColumn>::parse("customerId", "like", "c%").is_ok());
    }

    #[test]
    fn where_clause_numbers_placeholders() {
        let filter = Filter::new(
            Condition::<RouteColumn>::parse("origin", "=", "A").unwrap(),
        )
        .or(Condition::parse("distance", ">=", "10").unwrap());

        assert_eq!(filter.where_clause(1), "origin = $1 OR distance >= $2");
        assert_eq!(filter.where_clause(3), "origin = $3 OR distance >= $4");
        assert_eq!(filter.arguments().count(), 2);
    }

    #[test]
    fn date_columns_select_as_iso_text() {
        assert_eq!(
            OrderColumn::OrderDate.select_expr(),
            "to_char(order_date, 'YYYY-MM-DD') AS order_date"
        );
        assert_eq!(OrderColumn::Weight.select_expr(), "weight");
    }
}
