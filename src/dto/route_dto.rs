use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InsertRouteRequest {
    #[validate(length(min = 1, max = 6))]
    pub route_id: String,
    #[validate(length(min = 1, max = 30))]
    pub origin: String,
    #[validate(length(min = 1, max = 30))]
    pub destination: String,
    pub distance: Option<f64>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRouteRequest {
    #[validate(length(min = 1, max = 6))]
    pub route_id: String,
    pub attribute: String,
    pub new_value: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRouteRequest {
    #[validate(length(min = 1, max = 6))]
    pub route_id: String,
}
