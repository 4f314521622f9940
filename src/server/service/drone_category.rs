use sea_orm::DatabaseConnection;

use crate::server::{
    data::drone_category::DroneCategoryRepository,
    error::AppError,
    model::{
        drone_category::{
            CreateDroneCategoryParams, DroneCategory, DroneCategoryFilter,
            UpdateDroneCategoryParams,
        },
        list::{Page, PageRequest},
    },
    service::unique_field_error,
    util::validate::FieldErrors,
};

const NAME_MAX_LENGTH: usize = 250;
const NAME_TAKEN: &str = "drone category with this name already exists.";

pub struct DroneCategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DroneCategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new drone category
    pub async fn create(&self, params: CreateDroneCategoryParams) -> Result<DroneCategory, AppError> {
        let name = params.name.trim().to_string();
        self.validate(&name, None).await?;

        let category = DroneCategoryRepository::new(self.db)
            .create(name)
            .await
            .map_err(|e| unique_field_error(e, "name", NAME_TAKEN))?;

        tracing::info!(id = category.id, name = %category.name, "created drone category");

        Ok(category)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<DroneCategory>, AppError> {
        Ok(DroneCategoryRepository::new(self.db).get_by_id(id).await?)
    }

    pub async fn get_paginated(
        &self,
        filter: DroneCategoryFilter,
        page: PageRequest,
    ) -> Result<Page<DroneCategory>, AppError> {
        let (categories, total) = DroneCategoryRepository::new(self.db)
            .get_paginated(&filter, page)
            .await?;

        Ok(Page::new(categories, total, page))
    }

    /// Applies changes to an already loaded category
    pub async fn update(
        &self,
        existing: DroneCategory,
        params: UpdateDroneCategoryParams,
    ) -> Result<DroneCategory, AppError> {
        let name = params
            .name
            .map(|n| n.trim().to_string())
            .unwrap_or(existing.name);
        self.validate(&name, Some(existing.id)).await?;

        Ok(DroneCategoryRepository::new(self.db)
            .update(existing.id, name)
            .await
            .map_err(|e| unique_field_error(e, "name", NAME_TAKEN))?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        DroneCategoryRepository::new(self.db).delete(id).await?;

        tracing::info!(id, "deleted drone category");

        Ok(())
    }

    async fn validate(&self, name: &str, exclude_id: Option<i32>) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();

        errors.check_length("name", name, NAME_MAX_LENGTH);
        if !errors.contains("name")
            && DroneCategoryRepository::new(self.db)
                .name_exists(name, exclude_id)
                .await?
        {
            errors.add("name", NAME_TAKEN);
        }

        errors.finish()
    }
}
