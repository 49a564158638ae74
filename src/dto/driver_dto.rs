use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InsertDriverRequest {
    #[validate(length(min = 1, max = 6))]
    pub employee_id: String,
    #[validate(length(max = 20))]
    pub license_id: Option<String>,
    pub hours_driven: Option<f64>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDriverRequest {
    #[validate(length(min = 1, max = 6))]
    pub employee_id: String,
    pub attribute: String,
    pub new_value: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeleteDriverRequest {
    #[validate(length(min = 1, max = 6))]
    pub employee_id: String,
}
