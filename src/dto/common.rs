use serde::Deserialize;

/// Parámetros de la lectura filtrada: una condición tipada
/// `?column=...&op=...&value=...`
#[derive(Debug, Deserialize)]
pub struct FilterParams {
    pub column: String,
    pub op: String,
    pub value: String,
}
