//! Drone domain models and parameters.
//!
//! Drones are owned resources: `owner_id` is set from the authenticated caller at creation
//! and no parameter type in this module can change it afterwards.

use chrono::{DateTime, Utc};

use crate::{
    model::drone::{CreateDroneDto, DroneDto, DroneQueryDto, PaginatedDronesDto, PatchDroneDto},
    server::{
        model::list::{parse_ordering, text_filter, OrderBy, Page},
        util::link::{Links, DRONES_PATH},
    },
};

/// Drone with its category name and owner username resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Drone {
    pub id: i32,
    pub name: String,
    pub drone_category_id: i32,
    pub drone_category: String,
    pub owner_id: i32,
    pub owner: String,
    pub manufacturing_date: DateTime<Utc>,
    pub has_it_competed: bool,
    pub inserted_timestamp: DateTime<Utc>,
}

impl Drone {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - Drone row
    /// - `drone_category` - Name of the drone's category
    /// - `owner` - Username of the drone's owner
    pub fn from_entity(entity: entity::drone::Model, drone_category: String, owner: String) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            drone_category_id: entity.drone_category_id,
            drone_category,
            owner_id: entity.owner_id,
            owner,
            manufacturing_date: entity.manufacturing_date,
            has_it_competed: entity.has_it_competed,
            inserted_timestamp: entity.inserted_timestamp,
        }
    }

    pub fn into_dto(self, links: &Links) -> DroneDto {
        DroneDto {
            url: links.drone(self.id),
            pk: self.id,
            name: self.name,
            drone_category: self.drone_category,
            owner: self.owner,
            manufacturing_date: self.manufacturing_date,
            has_it_competed: self.has_it_competed,
            inserted_timestamp: self.inserted_timestamp,
        }
    }
}

/// Drone creation request; the category is referenced by name.
#[derive(Debug, Clone)]
pub struct CreateDroneParams {
    pub name: String,
    pub drone_category: String,
    pub manufacturing_date: DateTime<Utc>,
    pub has_it_competed: bool,
}

impl CreateDroneParams {
    pub fn from_dto(dto: CreateDroneDto) -> Self {
        Self {
            name: dto.name,
            drone_category: dto.drone_category,
            manufacturing_date: dto.manufacturing_date,
            has_it_competed: dto.has_it_competed,
        }
    }
}

/// Changes to apply to a drone; `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct UpdateDroneParams {
    pub name: Option<String>,
    pub drone_category: Option<String>,
    pub manufacturing_date: Option<DateTime<Utc>>,
    pub has_it_competed: Option<bool>,
}

impl UpdateDroneParams {
    pub fn from_dto(dto: CreateDroneDto) -> Self {
        Self {
            name: Some(dto.name),
            drone_category: Some(dto.drone_category),
            manufacturing_date: Some(dto.manufacturing_date),
            has_it_competed: Some(dto.has_it_competed),
        }
    }

    pub fn from_patch(dto: PatchDroneDto) -> Self {
        Self {
            name: dto.name,
            drone_category: dto.drone_category,
            manufacturing_date: dto.manufacturing_date,
            has_it_competed: dto.has_it_competed,
        }
    }
}

/// Fully resolved drone columns written by the repository.
#[derive(Debug, Clone)]
pub struct DroneChanges {
    pub name: String,
    pub drone_category_id: i32,
    pub manufacturing_date: DateTime<Utc>,
    pub has_it_competed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DroneOrderField {
    Name,
    ManufacturingDate,
}

impl DroneOrderField {
    fn from_param(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "manufacturing_date" => Some(Self::ManufacturingDate),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DroneFilter {
    pub name: Option<String>,
    pub drone_category_id: Option<i32>,
    pub manufacturing_date: Option<DateTime<Utc>>,
    pub has_it_competed: Option<bool>,
    pub search: Option<String>,
    pub ordering: Vec<OrderBy<DroneOrderField>>,
}

impl DroneFilter {
    pub fn from_query(query: DroneQueryDto) -> Self {
        Self {
            name: text_filter(query.name),
            drone_category_id: query.drone_category,
            manufacturing_date: query.manufacturing_date,
            has_it_competed: query.has_it_competed,
            search: text_filter(query.search),
            ordering: parse_ordering(query.ordering.as_deref(), DroneOrderField::from_param),
        }
    }
}

impl Page<Drone> {
    pub fn into_dto(self, links: &Links, raw_query: Option<&str>) -> PaginatedDronesDto {
        let collection_url = links.url(DRONES_PATH);

        PaginatedDronesDto {
            count: self.total,
            next: self.next_url(&collection_url, raw_query),
            previous: self.previous_url(&collection_url, raw_query),
            results: self.items.into_iter().map(|d| d.into_dto(links)).collect(),
        }
    }
}
