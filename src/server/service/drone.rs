use sea_orm::DatabaseConnection;

use crate::server::{
    data::{drone::DroneRepository, drone_category::DroneCategoryRepository},
    error::AppError,
    model::{
        drone::{CreateDroneParams, Drone, DroneChanges, DroneFilter, UpdateDroneParams},
        list::{Page, PageRequest},
    },
    service::unique_field_error,
    util::validate::FieldErrors,
};

const NAME_MAX_LENGTH: usize = 250;
const NAME_TAKEN: &str = "drone with this name already exists.";

pub struct DroneService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DroneService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a drone owned by `owner_id`.
    ///
    /// # Arguments
    /// - `params` - Drone fields with the category referenced by name
    /// - `owner_id` - Id of the authenticated caller
    ///
    /// # Returns
    /// - `Ok(Drone)` - Created drone
    /// - `Err(AppError::Validation)` - Invalid name, duplicate name or unknown category
    pub async fn create(&self, params: CreateDroneParams, owner_id: i32) -> Result<Drone, AppError> {
        let changes = self
            .resolve(
                params.name,
                &params.drone_category,
                params.manufacturing_date,
                params.has_it_competed,
                None,
            )
            .await?;

        let drone = DroneRepository::new(self.db)
            .create(changes, owner_id)
            .await
            .map_err(|e| unique_field_error(e, "name", NAME_TAKEN))?;

        tracing::info!(id = drone.id, owner_id, name = %drone.name, "created drone");

        Ok(drone)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Drone>, AppError> {
        Ok(DroneRepository::new(self.db).get_by_id(id).await?)
    }

    pub async fn get_paginated(
        &self,
        filter: DroneFilter,
        page: PageRequest,
    ) -> Result<Page<Drone>, AppError> {
        let (drones, total) = DroneRepository::new(self.db)
            .get_paginated(&filter, page)
            .await?;

        Ok(Page::new(drones, total, page))
    }

    /// Applies changes to an already loaded drone; ownership is unchanged
    pub async fn update(&self, existing: Drone, params: UpdateDroneParams) -> Result<Drone, AppError> {
        let category = params
            .drone_category
            .unwrap_or_else(|| existing.drone_category.clone());

        let changes = self
            .resolve(
                params.name.unwrap_or(existing.name),
                &category,
                params
                    .manufacturing_date
                    .unwrap_or(existing.manufacturing_date),
                params.has_it_competed.unwrap_or(existing.has_it_competed),
                Some(existing.id),
            )
            .await?;

        Ok(DroneRepository::new(self.db)
            .update(existing.id, changes)
            .await
            .map_err(|e| unique_field_error(e, "name", NAME_TAKEN))?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        DroneRepository::new(self.db).delete(id).await?;

        tracing::info!(id, "deleted drone");

        Ok(())
    }

    /// Validates drone fields and resolves the category name to its id
    async fn resolve(
        &self,
        name: String,
        drone_category: &str,
        manufacturing_date: chrono::DateTime<chrono::Utc>,
        has_it_competed: bool,
        exclude_id: Option<i32>,
    ) -> Result<DroneChanges, AppError> {
        let mut errors = FieldErrors::new();
        let name = name.trim().to_string();

        errors.check_length("name", &name, NAME_MAX_LENGTH);
        if !errors.contains("name")
            && DroneRepository::new(self.db)
                .name_exists(&name, exclude_id)
                .await?
        {
            errors.add("name", NAME_TAKEN);
        }

        let category = DroneCategoryRepository::new(self.db)
            .find_by_name(drone_category.trim())
            .await?;
        if category.is_none() {
            errors.add(
                "drone_category",
                format!("Object with name={} does not exist.", drone_category),
            );
        }

        errors.finish()?;

        let drone_category_id = category.map(|c| c.id).ok_or_else(|| {
            AppError::InternalError("Drone category vanished after validation".to_string())
        })?;

        Ok(DroneChanges {
            name,
            drone_category_id,
            manufacturing_date,
            has_it_competed,
        })
    }
}
