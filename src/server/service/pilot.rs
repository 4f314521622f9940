use sea_orm::DatabaseConnection;

use crate::server::{
    data::pilot::PilotRepository,
    error::AppError,
    model::{
        list::{Page, PageRequest},
        pilot::{CreatePilotParams, Gender, Pilot, PilotChanges, PilotFilter, UpdatePilotParams},
    },
    service::unique_field_error,
    util::validate::FieldErrors,
};

const NAME_MAX_LENGTH: usize = 150;
const NAME_TAKEN: &str = "pilot with this name already exists.";

pub struct PilotService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PilotService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreatePilotParams) -> Result<Pilot, AppError> {
        let changes = self
            .validate(params.name, &params.gender, params.races_count, None)
            .await?;

        let pilot = PilotRepository::new(self.db)
            .create(changes)
            .await
            .map_err(|e| unique_field_error(e, "name", NAME_TAKEN))?;

        tracing::info!(id = pilot.id, name = %pilot.name, "created pilot");

        Ok(pilot)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Pilot>, AppError> {
        Ok(PilotRepository::new(self.db).get_by_id(id).await?)
    }

    pub async fn get_paginated(
        &self,
        filter: PilotFilter,
        page: PageRequest,
    ) -> Result<Page<Pilot>, AppError> {
        let (pilots, total) = PilotRepository::new(self.db)
            .get_paginated(&filter, page)
            .await?;

        Ok(Page::new(pilots, total, page))
    }

    pub async fn update(&self, existing: Pilot, params: UpdatePilotParams) -> Result<Pilot, AppError> {
        let gender = params
            .gender
            .unwrap_or_else(|| existing.gender.code().to_string());

        let changes = self
            .validate(
                params.name.unwrap_or(existing.name),
                &gender,
                params.races_count.unwrap_or(existing.races_count),
                Some(existing.id),
            )
            .await?;

        Ok(PilotRepository::new(self.db)
            .update(existing.id, changes)
            .await
            .map_err(|e| unique_field_error(e, "name", NAME_TAKEN))?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        PilotRepository::new(self.db).delete(id).await?;

        tracing::info!(id, "deleted pilot");

        Ok(())
    }

    async fn validate(
        &self,
        name: String,
        gender: &str,
        races_count: i32,
        exclude_id: Option<i32>,
    ) -> Result<PilotChanges, AppError> {
        let mut errors = FieldErrors::new();
        let name = name.trim().to_string();

        errors.check_length("name", &name, NAME_MAX_LENGTH);
        if !errors.contains("name")
            && PilotRepository::new(self.db)
                .name_exists(&name, exclude_id)
                .await?
        {
            errors.add("name", NAME_TAKEN);
        }

        let parsed_gender = Gender::from_code(gender);
        if parsed_gender.is_none() {
            errors.add("gender", format!("\"{}\" is not a valid choice.", gender));
        }

        if races_count < 0 {
            errors.add(
                "races_count",
                "Ensure this value is greater than or equal to 0.",
            );
        }

        errors.finish()?;

        Ok(PilotChanges {
            name,
            gender: parsed_gender.unwrap_or(Gender::Male),
            races_count,
        })
    }
}
