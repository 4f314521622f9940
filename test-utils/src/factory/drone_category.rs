//! Drone category factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating drone categories.
pub struct DroneCategoryFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> DroneCategoryFactory<'a> {
    /// Creates a new factory.
    ///
    /// Defaults:
    /// - name: `"Category {id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Category {}", next_id()),
        }
    }

    /// Sets the category name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the category.
    pub async fn build(self) -> Result<entity::drone_category::Model, DbErr> {
        entity::drone_category::ActiveModel {
            name: ActiveValue::Set(self.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a drone category with default values.
pub async fn create_category(
    db: &DatabaseConnection,
) -> Result<entity::drone_category::Model, DbErr> {
    DroneCategoryFactory::new(db).build().await
}
