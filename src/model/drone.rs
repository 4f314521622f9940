use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DroneDto {
    pub url: String,
    pub pk: i32,
    pub name: String,
    /// Category name
    pub drone_category: String,
    /// Username of the owner
    pub owner: String,
    pub manufacturing_date: DateTime<Utc>,
    pub has_it_competed: bool,
    pub inserted_timestamp: DateTime<Utc>,
}

/// Full drone payload used by POST and PUT.
///
/// The owner is always the authenticated caller; an `owner` key in the body is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateDroneDto {
    pub name: String,
    /// Category name
    pub drone_category: String,
    pub manufacturing_date: DateTime<Utc>,
    #[serde(default)]
    pub has_it_competed: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PatchDroneDto {
    pub name: Option<String>,
    pub drone_category: Option<String>,
    pub manufacturing_date: Option<DateTime<Utc>>,
    pub has_it_competed: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedDronesDto {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<DroneDto>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DroneQueryDto {
    pub name: Option<String>,
    /// Drone category id
    pub drone_category: Option<i32>,
    pub manufacturing_date: Option<DateTime<Utc>>,
    pub has_it_competed: Option<bool>,
    /// Case-insensitive name prefix
    pub search: Option<String>,
    /// `name`, `manufacturing_date`; `-` prefix for descending
    pub ordering: Option<String>,
}
