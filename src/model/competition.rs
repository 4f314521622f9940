use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CompetitionDto {
    pub url: String,
    pub pk: i32,
    pub distance_in_feet: i32,
    pub distance_achievement_date: DateTime<Utc>,
    /// Pilot name
    pub pilot: String,
    /// Drone name
    pub drone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCompetitionDto {
    pub distance_in_feet: i32,
    pub distance_achievement_date: DateTime<Utc>,
    /// Pilot name
    pub pilot: String,
    /// Drone name
    pub drone: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PatchCompetitionDto {
    pub distance_in_feet: Option<i32>,
    pub distance_achievement_date: Option<DateTime<Utc>>,
    pub pilot: Option<String>,
    pub drone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedCompetitionsDto {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<CompetitionDto>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CompetitionQueryDto {
    pub distance_in_feet: Option<i32>,
    /// Achievement date lower bound (inclusive)
    pub from_achievement_date: Option<DateTime<Utc>>,
    /// Achievement date upper bound (inclusive)
    pub to_achievement_date: Option<DateTime<Utc>>,
    pub min_distance_in_feet: Option<i32>,
    pub max_distance_in_feet: Option<i32>,
    pub drone_name: Option<String>,
    pub pilot_name: Option<String>,
    /// `distance_in_feet`, `distance_achievement_date`; `-` prefix for descending
    pub ordering: Option<String>,
}
