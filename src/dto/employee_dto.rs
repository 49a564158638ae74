use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InsertEmployeeRequest {
    #[validate(length(min = 1, max = 6))]
    pub employee_id: String,
    #[validate(length(max = 9))]
    pub sin: Option<String>,
    #[validate(length(max = 20))]
    pub phone_number: Option<String>,
    #[validate(length(max = 40))]
    pub email: Option<String>,
    #[validate(length(max = 30))]
    pub work_location: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequest {
    #[validate(length(min = 1, max = 6))]
    pub employee_id: String,
    pub attribute: String,
    pub new_value: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeleteEmployeeRequest {
    #[validate(length(min = 1, max = 6))]
    pub employee_id: String,
}
