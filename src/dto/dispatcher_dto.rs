use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InsertDispatcherRequest {
    #[validate(length(min = 1, max = 6))]
    pub dispatcher_id: String,
    #[validate(length(min = 1, max = 6))]
    pub employee_id: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDispatcherRequest {
    #[validate(length(min = 1, max = 6))]
    pub dispatcher_id: String,
    pub attribute: String,
    pub new_value: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeleteDispatcherRequest {
    #[validate(length(min = 1, max = 6))]
    pub dispatcher_id: String,
}
