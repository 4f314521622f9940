//! User domain models and parameters.

use crate::{
    model::user::{
        CreateUserDto, PaginatedUsersDto, PatchUserDto, RegisteredUserDto, UserDroneDto, UserDto,
    },
    server::{
        model::list::Page,
        util::link::{Links, USERS_PATH},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct UserDrone {
    pub id: i32,
    pub name: String,
}

/// User with the drones they own.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub drones: Vec<UserDrone>,
}

impl User {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - User row
    /// - `drones` - Drone rows owned by the user
    pub fn from_entity(entity: entity::user::Model, drones: Vec<entity::drone::Model>) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            drones: drones
                .into_iter()
                .map(|drone| UserDrone {
                    id: drone.id,
                    name: drone.name,
                })
                .collect(),
        }
    }

    pub fn into_dto(self, links: &Links) -> UserDto {
        UserDto {
            url: links.user(self.id),
            pk: self.id,
            username: self.username,
            drones: self
                .drones
                .into_iter()
                .map(|drone| UserDroneDto {
                    url: links.drone(drone.id),
                    name: drone.name,
                })
                .collect(),
        }
    }
}

/// Newly registered user and the token issued to them.
#[derive(Debug, Clone)]
pub struct RegisteredUser {
    pub user: User,
    pub token: String,
}

impl RegisteredUser {
    pub fn into_dto(self, links: &Links) -> RegisteredUserDto {
        RegisteredUserDto {
            user: self.user.into_dto(links),
            token: self.token,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
}

impl CreateUserParams {
    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            username: dto.username,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub username: Option<String>,
}

impl UpdateUserParams {
    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            username: Some(dto.username),
        }
    }

    pub fn from_patch(dto: PatchUserDto) -> Self {
        Self {
            username: dto.username,
        }
    }
}

impl Page<User> {
    pub fn into_dto(self, links: &Links, raw_query: Option<&str>) -> PaginatedUsersDto {
        let collection_url = links.url(USERS_PATH);

        PaginatedUsersDto {
            count: self.total,
            next: self.next_url(&collection_url, raw_query),
            previous: self.previous_url(&collection_url, raw_query),
            results: self.items.into_iter().map(|u| u.into_dto(links)).collect(),
        }
    }
}
