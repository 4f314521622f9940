use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DroneCategoryDto {
    pub url: String,
    pub pk: i32,
    pub name: String,
    /// Links to the drones in this category
    pub drones: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateDroneCategoryDto {
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PatchDroneCategoryDto {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedDroneCategoriesDto {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<DroneCategoryDto>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DroneCategoryQueryDto {
    /// Exact name match
    pub name: Option<String>,
    /// Case-insensitive name prefix
    pub search: Option<String>,
    /// Comma separated fields, `-` prefix for descending (`name`)
    pub ordering: Option<String>,
}
