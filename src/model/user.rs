use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Drone summary embedded in a user representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDroneDto {
    pub url: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub url: String,
    pub pk: i32,
    pub username: String,
    pub drones: Vec<UserDroneDto>,
}

/// Response to a successful registration, the only read of the token besides rotation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisteredUserDto {
    #[serde(flatten)]
    pub user: UserDto,
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateUserDto {
    pub username: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PatchUserDto {
    pub username: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedUsersDto {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<UserDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenDto {
    pub token: String,
}
