//! Drone factory for creating test drone entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, TimeZone, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating drones with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let drone = DroneFactory::new(&db, category.id, owner.id)
///     .name("Atom")
///     .has_it_competed(true)
///     .build()
///     .await?;
/// ```
pub struct DroneFactory<'a> {
    db: &'a DatabaseConnection,
    drone_category_id: i32,
    owner_id: i32,
    name: String,
    manufacturing_date: DateTime<Utc>,
    has_it_competed: bool,
}

impl<'a> DroneFactory<'a> {
    /// Creates a new DroneFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Drone {id}"`
    /// - manufacturing_date: 2020-01-01T00:00:00Z
    /// - has_it_competed: `false`
    pub fn new(db: &'a DatabaseConnection, drone_category_id: i32, owner_id: i32) -> Self {
        Self {
            db,
            drone_category_id,
            owner_id,
            name: format!("Drone {}", next_id()),
            manufacturing_date: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
            has_it_competed: false,
        }
    }

    /// Sets the drone name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the manufacturing date.
    pub fn manufacturing_date(mut self, manufacturing_date: DateTime<Utc>) -> Self {
        self.manufacturing_date = manufacturing_date;
        self
    }

    /// Sets whether the drone has competed.
    pub fn has_it_competed(mut self, has_it_competed: bool) -> Self {
        self.has_it_competed = has_it_competed;
        self
    }

    /// Builds and inserts the drone.
    pub async fn build(self) -> Result<entity::drone::Model, DbErr> {
        entity::drone::ActiveModel {
            name: ActiveValue::Set(self.name),
            drone_category_id: ActiveValue::Set(self.drone_category_id),
            manufacturing_date: ActiveValue::Set(self.manufacturing_date),
            has_it_competed: ActiveValue::Set(self.has_it_competed),
            inserted_timestamp: ActiveValue::Set(Utc::now()),
            owner_id: ActiveValue::Set(self.owner_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a drone with default values in the given category, owned by the given user.
pub async fn create_drone(
    db: &DatabaseConnection,
    drone_category_id: i32,
    owner_id: i32,
) -> Result<entity::drone::Model, DbErr> {
    DroneFactory::new(db, drone_category_id, owner_id)
        .build()
        .await
}
