use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{competition::CompetitionRepository, drone::DroneRepository, pilot::PilotRepository},
    error::AppError,
    model::{
        competition::{
            Competition, CompetitionChanges, CompetitionFilter, CreateCompetitionParams,
            UpdateCompetitionParams,
        },
        list::{Page, PageRequest},
    },
    util::validate::FieldErrors,
};

pub struct CompetitionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CompetitionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateCompetitionParams) -> Result<Competition, AppError> {
        let changes = self
            .resolve(
                params.distance_in_feet,
                params.distance_achievement_date,
                &params.pilot,
                &params.drone,
            )
            .await?;

        let competition = CompetitionRepository::new(self.db).create(changes).await?;

        tracing::info!(
            id = competition.id,
            pilot = %competition.pilot,
            drone = %competition.drone,
            "recorded competition"
        );

        Ok(competition)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Competition>, AppError> {
        Ok(CompetitionRepository::new(self.db).get_by_id(id).await?)
    }

    pub async fn get_paginated(
        &self,
        filter: CompetitionFilter,
        page: PageRequest,
    ) -> Result<Page<Competition>, AppError> {
        let (competitions, total) = CompetitionRepository::new(self.db)
            .get_paginated(&filter, page)
            .await?;

        Ok(Page::new(competitions, total, page))
    }

    pub async fn update(
        &self,
        existing: Competition,
        params: UpdateCompetitionParams,
    ) -> Result<Competition, AppError> {
        let pilot = params.pilot.unwrap_or_else(|| existing.pilot.clone());
        let drone = params.drone.unwrap_or_else(|| existing.drone.clone());

        let changes = self
            .resolve(
                params.distance_in_feet.unwrap_or(existing.distance_in_feet),
                params
                    .distance_achievement_date
                    .unwrap_or(existing.distance_achievement_date),
                &pilot,
                &drone,
            )
            .await?;

        Ok(CompetitionRepository::new(self.db)
            .update(existing.id, changes)
            .await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        CompetitionRepository::new(self.db).delete(id).await?;

        tracing::info!(id, "deleted competition");

        Ok(())
    }

    /// Validates the distance and resolves pilot and drone names to ids
    async fn resolve(
        &self,
        distance_in_feet: i32,
        distance_achievement_date: DateTime<Utc>,
        pilot: &str,
        drone: &str,
    ) -> Result<CompetitionChanges, AppError> {
        let mut errors = FieldErrors::new();

        if distance_in_feet < 0 {
            errors.add(
                "distance_in_feet",
                "Ensure this value is greater than or equal to 0.",
            );
        }

        let pilot_row = PilotRepository::new(self.db).find_by_name(pilot.trim()).await?;
        if pilot_row.is_none() {
            errors.add("pilot", format!("Object with name={} does not exist.", pilot));
        }

        let drone_row = DroneRepository::new(self.db).find_by_name(drone.trim()).await?;
        if drone_row.is_none() {
            errors.add("drone", format!("Object with name={} does not exist.", drone));
        }

        errors.finish()?;

        match (pilot_row, drone_row) {
            (Some(pilot), Some(drone)) => Ok(CompetitionChanges {
                distance_in_feet,
                distance_achievement_date,
                pilot_id: pilot.id,
                drone_id: drone.id,
            }),
            _ => Err(AppError::InternalError(
                "Competition references vanished after validation".to_string(),
            )),
        }
    }
}
