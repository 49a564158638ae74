use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InsertOrderRequest {
    #[validate(length(min = 1, max = 6))]
    pub order_id: String,
    #[validate(length(min = 1, max = 6))]
    pub customer_id: String,
    pub weight: Option<f64>,
    #[validate(length(min = 1, max = 6))]
    pub route_id: String,
    /// Fecha en formato `YYYY-MM-DD`
    pub order_date: Option<String>,
    pub departure_time: Option<String>,
    pub arrival_time: Option<String>,
    pub invoice_id: Option<String>,
    pub dispatcher_id: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderRequest {
    #[validate(length(min = 1, max = 6))]
    pub order_id: String,
    pub attribute: String,
    pub new_value: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOrderRequest {
    #[validate(length(min = 1, max = 6))]
    pub order_id: String,
}

/// `?minDistance=` del join pedidos-rutas-ubicaciones
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LongHaulParams {
    pub min_distance: f64,
}

/// `?columns=orderId,weight,...` de la proyección
#[derive(Debug, Deserialize)]
pub struct ProjectionParams {
    pub columns: String,
}
