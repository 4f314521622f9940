use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ToyDto {
    pub pk: i32,
    pub name: String,
    pub description: String,
    pub toy_category: String,
    pub release_date: DateTime<Utc>,
    pub was_included_in_home: bool,
    pub created: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateToyDto {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub toy_category: String,
    pub release_date: DateTime<Utc>,
    #[serde(default)]
    pub was_included_in_home: bool,
}
