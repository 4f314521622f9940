//! Drone category domain models and parameters.

use crate::{
    model::drone_category::{
        CreateDroneCategoryDto, DroneCategoryDto, DroneCategoryQueryDto,
        PaginatedDroneCategoriesDto, PatchDroneCategoryDto,
    },
    server::{
        model::list::{parse_ordering, text_filter, OrderBy, Page},
        util::link::{Links, DRONE_CATEGORIES_PATH},
    },
};

/// Drone category with the ids of the drones filed under it.
#[derive(Debug, Clone, PartialEq)]
pub struct DroneCategory {
    pub id: i32,
    pub name: String,
    /// Drone ids ordered by drone name.
    pub drone_ids: Vec<i32>,
}

impl DroneCategory {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - Category row
    /// - `drone_ids` - Ids of the drones in this category
    pub fn from_entity(entity: entity::drone_category::Model, drone_ids: Vec<i32>) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            drone_ids,
        }
    }

    /// Converts the domain model to a DTO with absolute links.
    pub fn into_dto(self, links: &Links) -> DroneCategoryDto {
        DroneCategoryDto {
            url: links.drone_category(self.id),
            pk: self.id,
            name: self.name,
            drones: self.drone_ids.into_iter().map(|id| links.drone(id)).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateDroneCategoryParams {
    pub name: String,
}

impl CreateDroneCategoryParams {
    pub fn from_dto(dto: CreateDroneCategoryDto) -> Self {
        Self { name: dto.name }
    }
}

/// Changes to apply to a category; `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct UpdateDroneCategoryParams {
    pub name: Option<String>,
}

impl UpdateDroneCategoryParams {
    /// Full replacement, as sent by PUT.
    pub fn from_dto(dto: CreateDroneCategoryDto) -> Self {
        Self {
            name: Some(dto.name),
        }
    }

    /// Partial update, as sent by PATCH.
    pub fn from_patch(dto: PatchDroneCategoryDto) -> Self {
        Self { name: dto.name }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DroneCategoryOrderField {
    Name,
}

impl DroneCategoryOrderField {
    fn from_param(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DroneCategoryFilter {
    pub name: Option<String>,
    pub search: Option<String>,
    pub ordering: Vec<OrderBy<DroneCategoryOrderField>>,
}

impl DroneCategoryFilter {
    pub fn from_query(query: DroneCategoryQueryDto) -> Self {
        Self {
            name: text_filter(query.name),
            search: text_filter(query.search),
            ordering: parse_ordering(
                query.ordering.as_deref(),
                DroneCategoryOrderField::from_param,
            ),
        }
    }
}

impl Page<DroneCategory> {
    pub fn into_dto(self, links: &Links, raw_query: Option<&str>) -> PaginatedDroneCategoriesDto {
        let collection_url = links.url(DRONE_CATEGORIES_PATH);

        PaginatedDroneCategoriesDto {
            count: self.total,
            next: self.next_url(&collection_url, raw_query),
            previous: self.previous_url(&collection_url, raw_query),
            results: self
                .items
                .into_iter()
                .map(|category| category.into_dto(links))
                .collect(),
        }
    }
}
