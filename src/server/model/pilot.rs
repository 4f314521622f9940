//! Pilot domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::pilot::{CreatePilotDto, PaginatedPilotsDto, PatchPilotDto, PilotDto, PilotQueryDto},
    server::{
        model::{
            competition::Competition,
            list::{parse_ordering, text_filter, OrderBy, Page},
        },
        util::link::{Links, PILOTS_PATH},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Parses the stored single-letter code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "M" => Some(Self::Male),
            "F" => Some(Self::Female),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

/// Pilot with every competition they took part in.
#[derive(Debug, Clone, PartialEq)]
pub struct Pilot {
    pub id: i32,
    pub name: String,
    pub gender: Gender,
    pub races_count: i32,
    pub inserted_timestamp: DateTime<Utc>,
    pub competitions: Vec<Competition>,
}

impl Pilot {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - Pilot row
    /// - `competitions` - The pilot's competitions, already converted
    ///
    /// # Returns
    /// - `Ok(Pilot)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Stored gender code is not `M` or `F`
    pub fn from_entity(
        entity: entity::pilot::Model,
        competitions: Vec<Competition>,
    ) -> Result<Self, DbErr> {
        let gender = Gender::from_code(&entity.gender).ok_or_else(|| {
            DbErr::Custom(format!(
                "Pilot {} has unknown gender code '{}'",
                entity.id, entity.gender
            ))
        })?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            gender,
            races_count: entity.races_count,
            inserted_timestamp: entity.inserted_timestamp,
            competitions,
        })
    }

    pub fn into_dto(self, links: &Links) -> PilotDto {
        PilotDto {
            url: links.pilot(self.id),
            pk: self.id,
            name: self.name,
            gender: self.gender.code().to_string(),
            gender_description: self.gender.description().to_string(),
            races_count: self.races_count,
            inserted_timestamp: self.inserted_timestamp,
            competitions: self
                .competitions
                .into_iter()
                .map(|c| c.into_dto(links))
                .collect(),
        }
    }
}

/// Pilot creation request; `gender` is the raw code and is validated by the service.
#[derive(Debug, Clone)]
pub struct CreatePilotParams {
    pub name: String,
    pub gender: String,
    pub races_count: i32,
}

impl CreatePilotParams {
    pub fn from_dto(dto: CreatePilotDto) -> Self {
        Self {
            name: dto.name,
            gender: dto.gender,
            races_count: dto.races_count,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePilotParams {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub races_count: Option<i32>,
}

impl UpdatePilotParams {
    pub fn from_dto(dto: CreatePilotDto) -> Self {
        Self {
            name: Some(dto.name),
            gender: Some(dto.gender),
            races_count: Some(dto.races_count),
        }
    }

    pub fn from_patch(dto: PatchPilotDto) -> Self {
        Self {
            name: dto.name,
            gender: dto.gender,
            races_count: dto.races_count,
        }
    }
}

/// Validated pilot columns written by the repository.
#[derive(Debug, Clone)]
pub struct PilotChanges {
    pub name: String,
    pub gender: Gender,
    pub races_count: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PilotOrderField {
    Name,
    RacesCount,
}

impl PilotOrderField {
    fn from_param(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "races_count" => Some(Self::RacesCount),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PilotFilter {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub races_count: Option<i32>,
    pub search: Option<String>,
    pub ordering: Vec<OrderBy<PilotOrderField>>,
}

impl PilotFilter {
    pub fn from_query(query: PilotQueryDto) -> Self {
        Self {
            name: text_filter(query.name),
            gender: text_filter(query.gender),
            races_count: query.races_count,
            search: text_filter(query.search),
            ordering: parse_ordering(query.ordering.as_deref(), PilotOrderField::from_param),
        }
    }
}

impl Page<Pilot> {
    pub fn into_dto(self, links: &Links, raw_query: Option<&str>) -> PaginatedPilotsDto {
        let collection_url = links.url(PILOTS_PATH);

        PaginatedPilotsDto {
            count: self.total,
            next: self.next_url(&collection_url, raw_query),
            previous: self.previous_url(&collection_url, raw_query),
            results: self.items.into_iter().map(|p| p.into_dto(links)).collect(),
        }
    }
}
