use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InsertInvoiceRequest {
    #[validate(length(min = 1, max = 6))]
    pub invoice_id: String,
    /// Fecha en formato `YYYY-MM-DD`
    pub issue_date: Option<String>,
    #[validate(length(max = 20))]
    pub status: Option<String>,
    #[validate(length(max = 6))]
    pub order_id: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInvoiceRequest {
    #[validate(length(min = 1, max = 6))]
    pub invoice_id: String,
    pub attribute: String,
    pub new_value: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeleteInvoiceRequest {
    #[validate(length(min = 1, max = 6))]
    pub invoice_id: String,
}
