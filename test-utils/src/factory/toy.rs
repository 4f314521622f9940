//! Toy factory.

use crate::factory::helpers::next_id;
use chrono::{TimeZone, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating toys.
pub struct ToyFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    toy_category: String,
}

impl<'a> ToyFactory<'a> {
    /// Creates a new ToyFactory.
    ///
    /// Defaults:
    /// - name: `"Toy {id}"`
    /// - toy_category: `"Action figures"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Toy {}", next_id()),
            toy_category: "Action figures".to_string(),
        }
    }

    /// Sets the toy name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the toy category label.
    pub fn toy_category(mut self, toy_category: impl Into<String>) -> Self {
        self.toy_category = toy_category.into();
        self
    }

    /// Builds and inserts the toy.
    pub async fn build(self) -> Result<entity::toy::Model, DbErr> {
        entity::toy::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(String::new()),
            toy_category: ActiveValue::Set(self.toy_category),
            release_date: ActiveValue::Set(Utc.with_ymd_and_hms(2019, 10, 1, 0, 0, 0).unwrap()),
            was_included_in_home: ActiveValue::Set(false),
            created: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a toy with default values.
pub async fn create_toy(db: &DatabaseConnection) -> Result<entity::toy::Model, DbErr> {
    ToyFactory::new(db).build().await
}
