use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InsertCustomerRequest {
    #[validate(length(min = 1, max = 6))]
    pub customer_id: String,
    #[validate(length(max = 20))]
    pub phone_number: Option<String>,
    #[validate(length(max = 40))]
    pub email: Option<String>,
    #[validate(length(max = 30))]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerRequest {
    #[validate(length(min = 1, max = 6))]
    pub customer_id: String,
    pub attribute: String,
    pub new_value: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCustomerRequest {
    #[validate(length(min = 1, max = 6))]
    pub customer_id: String,
}
