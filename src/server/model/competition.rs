//! Competition domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::competition::{
        CompetitionDto, CompetitionQueryDto, CreateCompetitionDto, PaginatedCompetitionsDto,
        PatchCompetitionDto,
    },
    server::{
        model::list::{parse_ordering, text_filter, OrderBy, Page},
        util::link::{Links, COMPETITIONS_PATH},
    },
};

/// Competition result with pilot and drone names resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Competition {
    pub id: i32,
    pub distance_in_feet: i32,
    pub distance_achievement_date: DateTime<Utc>,
    pub pilot_id: i32,
    pub pilot: String,
    pub drone_id: i32,
    pub drone: String,
}

impl Competition {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - Competition row
    /// - `pilot` - Name of the competing pilot
    /// - `drone` - Name of the drone flown
    pub fn from_entity(entity: entity::competition::Model, pilot: String, drone: String) -> Self {
        Self {
            id: entity.id,
            distance_in_feet: entity.distance_in_feet,
            distance_achievement_date: entity.distance_achievement_date,
            pilot_id: entity.pilot_id,
            pilot,
            drone_id: entity.drone_id,
            drone,
        }
    }

    pub fn into_dto(self, links: &Links) -> CompetitionDto {
        CompetitionDto {
            url: links.competition(self.id),
            pk: self.id,
            distance_in_feet: self.distance_in_feet,
            distance_achievement_date: self.distance_achievement_date,
            pilot: self.pilot,
            drone: self.drone,
        }
    }
}

/// Competition creation request; pilot and drone are referenced by name.
#[derive(Debug, Clone)]
pub struct CreateCompetitionParams {
    pub distance_in_feet: i32,
    pub distance_achievement_date: DateTime<Utc>,
    pub pilot: String,
    pub drone: String,
}

impl CreateCompetitionParams {
    pub fn from_dto(dto: CreateCompetitionDto) -> Self {
        Self {
            distance_in_feet: dto.distance_in_feet,
            distance_achievement_date: dto.distance_achievement_date,
            pilot: dto.pilot,
            drone: dto.drone,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCompetitionParams {
    pub distance_in_feet: Option<i32>,
    pub distance_achievement_date: Option<DateTime<Utc>>,
    pub pilot: Option<String>,
    pub drone: Option<String>,
}

impl UpdateCompetitionParams {
    pub fn from_dto(dto: CreateCompetitionDto) -> Self {
        Self {
            distance_in_feet: Some(dto.distance_in_feet),
            distance_achievement_date: Some(dto.distance_achievement_date),
            pilot: Some(dto.pilot),
            drone: Some(dto.drone),
        }
    }

    pub fn from_patch(dto: PatchCompetitionDto) -> Self {
        Self {
            distance_in_feet: dto.distance_in_feet,
            distance_achievement_date: dto.distance_achievement_date,
            pilot: dto.pilot,
            drone: dto.drone,
        }
    }
}

/// Fully resolved competition columns written by the repository.
#[derive(Debug, Clone)]
pub struct CompetitionChanges {
    pub distance_in_feet: i32,
    pub distance_achievement_date: DateTime<Utc>,
    pub pilot_id: i32,
    pub drone_id: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompetitionOrderField {
    DistanceInFeet,
    DistanceAchievementDate,
}

impl CompetitionOrderField {
    fn from_param(name: &str) -> Option<Self> {
        match name {
            "distance_in_feet" => Some(Self::DistanceInFeet),
            "distance_achievement_date" => Some(Self::DistanceAchievementDate),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CompetitionFilter {
    pub distance_in_feet: Option<i32>,
    pub from_achievement_date: Option<DateTime<Utc>>,
    pub to_achievement_date: Option<DateTime<Utc>>,
    pub min_distance_in_feet: Option<i32>,
    pub max_distance_in_feet: Option<i32>,
    pub drone_name: Option<String>,
    pub pilot_name: Option<String>,
    pub ordering: Vec<OrderBy<CompetitionOrderField>>,
}

impl CompetitionFilter {
    pub fn from_query(query: CompetitionQueryDto) -> Self {
        Self {
            distance_in_feet: query.distance_in_feet,
            from_achievement_date: query.from_achievement_date,
            to_achievement_date: query.to_achievement_date,
            min_distance_in_feet: query.min_distance_in_feet,
            max_distance_in_feet: query.max_distance_in_feet,
            drone_name: text_filter(query.drone_name),
            pilot_name: text_filter(query.pilot_name),
            ordering: parse_ordering(
                query.ordering.as_deref(),
                CompetitionOrderField::from_param,
            ),
        }
    }
}

impl Page<Competition> {
    pub fn into_dto(self, links: &Links, raw_query: Option<&str>) -> PaginatedCompetitionsDto {
        let collection_url = links.url(COMPETITIONS_PATH);

        PaginatedCompetitionsDto {
            count: self.total,
            next: self.next_url(&collection_url, raw_query),
            previous: self.previous_url(&collection_url, raw_query),
            results: self.items.into_iter().map(|c| c.into_dto(links)).collect(),
        }
    }
}
