use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};
use std::collections::HashMap;

use crate::server::{
    data::{direction, name_prefix},
    model::{
        drone_category::{DroneCategory, DroneCategoryFilter, DroneCategoryOrderField},
        list::PageRequest,
    },
};

pub struct DroneCategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DroneCategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: String) -> Result<DroneCategory, DbErr> {
        let category = entity::drone_category::ActiveModel {
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(DroneCategory::from_entity(category, Vec::new()))
    }

    /// Gets a category by ID with the ids of its drones
    pub async fn get_by_id(&self, id: i32) -> Result<Option<DroneCategory>, DbErr> {
        let Some(category) = entity::prelude::DroneCategory::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut drones = self.drone_ids_by_category(&[category.id]).await?;
        let drone_ids = drones.remove(&category.id).unwrap_or_default();

        Ok(Some(DroneCategory::from_entity(category, drone_ids)))
    }

    pub async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Option<entity::drone_category::Model>, DbErr> {
        entity::prelude::DroneCategory::find()
            .filter(entity::drone_category::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Checks whether another category already uses `name`.
    ///
    /// # Arguments
    /// - `name` - Candidate name
    /// - `exclude_id` - Category being renamed, ignored in the check
    pub async fn name_exists(&self, name: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::DroneCategory::find()
            .filter(entity::drone_category::Column::Name.eq(name));

        if let Some(id) = exclude_id {
            query = query.filter(entity::drone_category::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Gets one page of categories matching the filter, with the total match count
    pub async fn get_paginated(
        &self,
        filter: &DroneCategoryFilter,
        page: PageRequest,
    ) -> Result<(Vec<DroneCategory>, u64), DbErr> {
        let query = Self::filtered(filter);

        let total = query.clone().count(self.db).await?;

        let categories = query
            .offset(page.offset)
            .limit(page.limit)
            .all(self.db)
            .await?;

        let ids: Vec<i32> = categories.iter().map(|c| c.id).collect();
        let mut drones = self.drone_ids_by_category(&ids).await?;

        let categories = categories
            .into_iter()
            .map(|category| {
                let drone_ids = drones.remove(&category.id).unwrap_or_default();
                DroneCategory::from_entity(category, drone_ids)
            })
            .collect();

        Ok((categories, total))
    }

    pub async fn update(&self, id: i32, name: String) -> Result<DroneCategory, DbErr> {
        entity::drone_category::ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: ActiveValue::Set(name),
        }
        .update(self.db)
        .await?;

        self.get_by_id(id).await?.ok_or(DbErr::RecordNotFound(format!(
            "Drone category with id {} not found after update",
            id
        )))
    }

    /// Deletes a category; its drones and their competitions cascade
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::DroneCategory::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    fn filtered(filter: &DroneCategoryFilter) -> Select<entity::prelude::DroneCategory> {
        use entity::drone_category::Column;

        let mut query = entity::prelude::DroneCategory::find();

        if let Some(name) = &filter.name {
            query = query.filter(Column::Name.eq(name.as_str()));
        }
        if let Some(search) = &filter.search {
            query = query.filter(Column::Name.like(name_prefix(search)));
        }

        if filter.ordering.is_empty() {
            query = query.order_by_asc(Column::Name);
        }
        for order in &filter.ordering {
            let column = match order.field {
                DroneCategoryOrderField::Name => Column::Name,
            };
            query = query.order_by(column, direction(order.descending));
        }

        query.order_by_asc(Column::Id)
    }

    /// Drone ids grouped by category, each group ordered by drone name
    async fn drone_ids_by_category(
        &self,
        category_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<i32>>, DbErr> {
        if category_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let drones = entity::prelude::Drone::find()
            .filter(entity::drone::Column::DroneCategoryId.is_in(category_ids.iter().copied()))
            .order_by_asc(entity::drone::Column::Name)
            .all(self.db)
            .await?;

        let mut grouped: HashMap<i32, Vec<i32>> = HashMap::new();
        for drone in drones {
            grouped
                .entry(drone.drone_category_id)
                .or_default()
                .push(drone.id);
        }

        Ok(grouped)
    }
}
