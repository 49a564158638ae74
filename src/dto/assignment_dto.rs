use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DriverDrivesRequest {
    #[validate(length(min = 1, max = 6))]
    pub plate_number: String,
    #[validate(length(min = 1, max = 6))]
    pub employee_id: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDriverDrivesRequest {
    #[validate(length(min = 1, max = 6))]
    pub plate_number: String,
    #[validate(length(min = 1, max = 6))]
    pub employee_id: String,
    pub attribute: String,
    pub new_value: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AssignedRequest {
    #[validate(length(min = 1, max = 6))]
    pub plate_number: String,
    #[validate(length(min = 1, max = 6))]
    pub employee_id: String,
    #[validate(length(min = 1, max = 6))]
    pub order_id: String,
}
