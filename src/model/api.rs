use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Error body returned by every failing endpoint.
///
/// `fields` is only present for validation failures and maps each offending field to its
/// messages.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<BTreeMap<String, Vec<String>>>,
}

impl ErrorDto {
    /// Creates an error body carrying only a message.
    pub fn message(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            fields: None,
        }
    }
}

/// Limit/offset pagination query parameters shared by every paginated collection.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQueryDto {
    /// Number of results to return per page
    pub limit: Option<u64>,
    /// Initial index from which to return the results
    pub offset: Option<u64>,
}

/// Links to every collection exposed by the API.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiRootDto {
    #[serde(rename = "drone-categories")]
    pub drone_categories: String,
    pub drones: String,
    pub pilots: String,
    pub competitions: String,
    pub users: String,
    pub toys: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    pub status: String,
}
