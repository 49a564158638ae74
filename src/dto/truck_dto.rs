use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InsertTruckRequest {
    #[validate(length(min = 1, max = 6))]
    pub plate_number: String,
    #[validate(length(max = 30))]
    pub model: Option<String>,
    pub mileage: Option<f64>,
    #[validate(length(max = 20))]
    pub status: Option<String>,
    #[validate(length(max = 30))]
    pub parked_at: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTruckRequest {
    #[validate(length(min = 1, max = 6))]
    pub plate_number: String,
    pub attribute: String,
    pub new_value: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTruckRequest {
    #[validate(length(min = 1, max = 6))]
    pub plate_number: String,
}
