use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};
use std::collections::HashMap;

use crate::server::{
    data::{direction, name_prefix},
    model::{
        drone::{Drone, DroneChanges, DroneFilter, DroneOrderField},
        list::PageRequest,
    },
};

pub struct DroneRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DroneRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a drone owned by `owner_id` and returns it with category and owner names
    pub async fn create(&self, changes: DroneChanges, owner_id: i32) -> Result<Drone, DbErr> {
        let drone = entity::drone::ActiveModel {
            name: ActiveValue::Set(changes.name),
            drone_category_id: ActiveValue::Set(changes.drone_category_id),
            manufacturing_date: ActiveValue::Set(changes.manufacturing_date),
            has_it_competed: ActiveValue::Set(changes.has_it_competed),
            inserted_timestamp: ActiveValue::Set(Utc::now()),
            owner_id: ActiveValue::Set(owner_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.enrich(vec![drone])
            .await?
            .pop()
            .ok_or(DbErr::RecordNotFound("Drone not found after creation".to_string()))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Drone>, DbErr> {
        let Some(drone) = entity::prelude::Drone::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(self.enrich(vec![drone]).await?.pop())
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::drone::Model>, DbErr> {
        entity::prelude::Drone::find()
            .filter(entity::drone::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Checks whether another drone already uses `name`, ignoring `exclude_id`
    pub async fn name_exists(&self, name: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Drone::find().filter(entity::drone::Column::Name.eq(name));

        if let Some(id) = exclude_id {
            query = query.filter(entity::drone::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Gets one page of drones matching the filter, with the total match count
    pub async fn get_paginated(
        &self,
        filter: &DroneFilter,
        page: PageRequest,
    ) -> Result<(Vec<Drone>, u64), DbErr> {
        let query = Self::filtered(filter);

        let total = query.clone().count(self.db).await?;

        let drones = query
            .offset(page.offset)
            .limit(page.limit)
            .all(self.db)
            .await?;

        Ok((self.enrich(drones).await?, total))
    }

    /// Gets drones owned by any of the given users, grouped by owner and ordered by name
    pub async fn get_by_owner_ids(
        &self,
        owner_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<entity::drone::Model>>, DbErr> {
        if owner_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let drones = entity::prelude::Drone::find()
            .filter(entity::drone::Column::OwnerId.is_in(owner_ids.iter().copied()))
            .order_by_asc(entity::drone::Column::Name)
            .order_by_asc(entity::drone::Column::Id)
            .all(self.db)
            .await?;

        let mut grouped: HashMap<i32, Vec<entity::drone::Model>> = HashMap::new();
        for drone in drones {
            grouped.entry(drone.owner_id).or_default().push(drone);
        }

        Ok(grouped)
    }

    /// Overwrites the writable columns of a drone; the owner is never touched
    pub async fn update(&self, id: i32, changes: DroneChanges) -> Result<Drone, DbErr> {
        entity::drone::ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: ActiveValue::Set(changes.name),
            drone_category_id: ActiveValue::Set(changes.drone_category_id),
            manufacturing_date: ActiveValue::Set(changes.manufacturing_date),
            has_it_competed: ActiveValue::Set(changes.has_it_competed),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        self.get_by_id(id).await?.ok_or(DbErr::RecordNotFound(format!(
            "Drone with id {} not found after update",
            id
        )))
    }

    /// Deletes a drone; its competitions cascade
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Drone::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    fn filtered(filter: &DroneFilter) -> Select<entity::prelude::Drone> {
        use entity::drone::Column;

        let mut query = entity::prelude::Drone::find();

        if let Some(name) = &filter.name {
            query = query.filter(Column::Name.eq(name.as_str()));
        }
        if let Some(category_id) = filter.drone_category_id {
            query = query.filter(Column::DroneCategoryId.eq(category_id));
        }
        if let Some(date) = filter.manufacturing_date {
            query = query.filter(Column::ManufacturingDate.eq(date));
        }
        if let Some(has_it_competed) = filter.has_it_competed {
            query = query.filter(Column::HasItCompeted.eq(has_it_competed));
        }
        if let Some(search) = &filter.search {
            query = query.filter(Column::Name.like(name_prefix(search)));
        }

        if filter.ordering.is_empty() {
            query = query.order_by_asc(Column::Name);
        }
        for order in &filter.ordering {
            let column = match order.field {
                DroneOrderField::Name => Column::Name,
                DroneOrderField::ManufacturingDate => Column::ManufacturingDate,
            };
            query = query.order_by(column, direction(order.descending));
        }

        query.order_by_asc(Column::Id)
    }

    /// Resolves category names and owner usernames for a batch of drones
    async fn enrich(&self, drones: Vec<entity::drone::Model>) -> Result<Vec<Drone>, DbErr> {
        if drones.is_empty() {
            return Ok(Vec::new());
        }

        let category_ids: Vec<i32> = drones.iter().map(|d| d.drone_category_id).collect();
        let owner_ids: Vec<i32> = drones.iter().map(|d| d.owner_id).collect();

        let categories: HashMap<i32, String> = entity::prelude::DroneCategory::find()
            .filter(entity::drone_category::Column::Id.is_in(category_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect();

        let owners: HashMap<i32, String> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(owner_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|u| (u.id, u.username))
            .collect();

        drones
            .into_iter()
            .map(|drone| {
                let category = categories.get(&drone.drone_category_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Drone category {} of drone {} not found",
                        drone.drone_category_id, drone.id
                    ))
                })?;
                let owner = owners.get(&drone.owner_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Owner {} of drone {} not found",
                        drone.owner_id, drone.id
                    ))
                })?;

                Ok(Drone::from_entity(drone, category, owner))
            })
            .collect()
    }
}
