use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InsertLocationRequest {
    #[validate(length(min = 1, max = 30))]
    pub coordinate: String,
    #[validate(length(max = 6))]
    pub city: Option<String>,
    #[validate(length(min = 1, max = 40))]
    pub address: String,
    pub capacity: Option<i32>,
    pub trucks_parked: Option<i32>,
    pub close_time: Option<String>,
    pub open_time: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLocationRequest {
    #[validate(length(min = 1, max = 30))]
    pub coordinate: String,
    pub attribute: String,
    pub new_value: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeleteLocationRequest {
    #[validate(length(min = 1, max = 30))]
    pub coordinate: String,
}
