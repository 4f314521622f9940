//! Toy domain model.

use chrono::{DateTime, Utc};

use crate::model::toy::{CreateToyDto, ToyDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Toy {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub toy_category: String,
    pub release_date: DateTime<Utc>,
    pub was_included_in_home: bool,
    pub created: DateTime<Utc>,
}

impl Toy {
    pub fn from_entity(entity: entity::toy::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            toy_category: entity.toy_category,
            release_date: entity.release_date,
            was_included_in_home: entity.was_included_in_home,
            created: entity.created,
        }
    }

    pub fn into_dto(self) -> ToyDto {
        ToyDto {
            pk: self.id,
            name: self.name,
            description: self.description,
            toy_category: self.toy_category,
            release_date: self.release_date,
            was_included_in_home: self.was_included_in_home,
            created: self.created,
        }
    }
}

/// Every writable toy field; used for both creation and full replacement.
#[derive(Debug, Clone)]
pub struct ToyParams {
    pub name: String,
    pub description: String,
    pub toy_category: String,
    pub release_date: DateTime<Utc>,
    pub was_included_in_home: bool,
}

impl ToyParams {
    pub fn from_dto(dto: CreateToyDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            toy_category: dto.toy_category,
            release_date: dto.release_date,
            was_included_in_home: dto.was_included_in_home,
        }
    }
}
