use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::server::{
    data::{competition::CompetitionRepository, direction, name_prefix},
    model::{
        list::PageRequest,
        pilot::{Pilot, PilotChanges, PilotFilter, PilotOrderField},
    },
};

pub struct PilotRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PilotRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, changes: PilotChanges) -> Result<Pilot, DbErr> {
        let pilot = entity::pilot::ActiveModel {
            name: ActiveValue::Set(changes.name),
            gender: ActiveValue::Set(changes.gender.code().to_string()),
            races_count: ActiveValue::Set(changes.races_count),
            inserted_timestamp: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Pilot::from_entity(pilot, Vec::new())
    }

    /// Gets a pilot by ID with all of their competitions
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Pilot>, DbErr> {
        let Some(pilot) = entity::prelude::Pilot::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut competitions = CompetitionRepository::new(self.db)
            .get_by_pilot_ids(&[pilot.id])
            .await?;
        let competitions = competitions.remove(&pilot.id).unwrap_or_default();

        Ok(Some(Pilot::from_entity(pilot, competitions)?))
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::pilot::Model>, DbErr> {
        entity::prelude::Pilot::find()
            .filter(entity::pilot::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Checks whether another pilot already uses `name`, ignoring `exclude_id`
    pub async fn name_exists(&self, name: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Pilot::find().filter(entity::pilot::Column::Name.eq(name));

        if let Some(id) = exclude_id {
            query = query.filter(entity::pilot::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Gets one page of pilots matching the filter, with the total match count
    pub async fn get_paginated(
        &self,
        filter: &PilotFilter,
        page: PageRequest,
    ) -> Result<(Vec<Pilot>, u64), DbErr> {
        let query = Self::filtered(filter);

        let total = query.clone().count(self.db).await?;

        let pilots = query
            .offset(page.offset)
            .limit(page.limit)
            .all(self.db)
            .await?;

        let ids: Vec<i32> = pilots.iter().map(|p| p.id).collect();
        let mut competitions = CompetitionRepository::new(self.db)
            .get_by_pilot_ids(&ids)
            .await?;

        let pilots = pilots
            .into_iter()
            .map(|pilot| {
                let pilot_competitions = competitions.remove(&pilot.id).unwrap_or_default();
                Pilot::from_entity(pilot, pilot_competitions)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok((pilots, total))
    }

    pub async fn update(&self, id: i32, changes: PilotChanges) -> Result<Pilot, DbErr> {
        entity::pilot::ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: ActiveValue::Set(changes.name),
            gender: ActiveValue::Set(changes.gender.code().to_string()),
            races_count: ActiveValue::Set(changes.races_count),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        self.get_by_id(id).await?.ok_or(DbErr::RecordNotFound(format!(
            "Pilot with id {} not found after update",
            id
        )))
    }

    /// Deletes a pilot; their competitions cascade
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Pilot::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    fn filtered(filter: &PilotFilter) -> Select<entity::prelude::Pilot> {
        use entity::pilot::Column;

        let mut query = entity::prelude::Pilot::find();

        if let Some(name) = &filter.name {
            query = query.filter(Column::Name.eq(name.as_str()));
        }
        if let Some(gender) = &filter.gender {
            query = query.filter(Column::Gender.eq(gender.as_str()));
        }
        if let Some(races_count) = filter.races_count {
            query = query.filter(Column::RacesCount.eq(races_count));
        }
        if let Some(search) = &filter.search {
            query = query.filter(Column::Name.like(name_prefix(search)));
        }

        if filter.ordering.is_empty() {
            query = query.order_by_asc(Column::Name);
        }
        for order in &filter.ordering {
            let column = match order.field {
                PilotOrderField::Name => Column::Name,
                PilotOrderField::RacesCount => Column::RacesCount,
            };
            query = query.order_by(column, direction(order.descending));
        }

        query.order_by_asc(Column::Id)
    }
}
