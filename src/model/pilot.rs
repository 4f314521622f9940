use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::competition::CompetitionDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PilotDto {
    pub url: String,
    pub pk: i32,
    pub name: String,
    /// `M` or `F`
    pub gender: String,
    /// `Male` or `Female`
    pub gender_description: String,
    pub races_count: i32,
    pub inserted_timestamp: DateTime<Utc>,
    pub competitions: Vec<CompetitionDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePilotDto {
    pub name: String,
    #[serde(default = "default_gender")]
    pub gender: String,
    #[serde(default)]
    pub races_count: i32,
}

fn default_gender() -> String {
    "M".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PatchPilotDto {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub races_count: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedPilotsDto {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<PilotDto>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PilotQueryDto {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub races_count: Option<i32>,
    /// Case-insensitive name prefix
    pub search: Option<String>,
    /// `name`, `races_count`; `-` prefix for descending
    pub ordering: Option<String>,
}
