use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};
use std::collections::HashMap;

use crate::server::{
    data::direction,
    model::{
        competition::{Competition, CompetitionChanges, CompetitionFilter, CompetitionOrderField},
        list::PageRequest,
    },
};

pub struct CompetitionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CompetitionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, changes: CompetitionChanges) -> Result<Competition, DbErr> {
        let competition = entity::competition::ActiveModel {
            pilot_id: ActiveValue::Set(changes.pilot_id),
            drone_id: ActiveValue::Set(changes.drone_id),
            distance_in_feet: ActiveValue::Set(changes.distance_in_feet),
            distance_achievement_date: ActiveValue::Set(changes.distance_achievement_date),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.enrich(vec![competition])
            .await?
            .pop()
            .ok_or(DbErr::RecordNotFound(
                "Competition not found after creation".to_string(),
            ))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Competition>, DbErr> {
        let Some(competition) = entity::prelude::Competition::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.enrich(vec![competition]).await?.pop())
    }

    /// Gets one page of competitions matching the filter, with the total match count
    pub async fn get_paginated(
        &self,
        filter: &CompetitionFilter,
        page: PageRequest,
    ) -> Result<(Vec<Competition>, u64), DbErr> {
        let query = self.filtered(filter).await?;

        let total = query.clone().count(self.db).await?;

        let competitions = query
            .offset(page.offset)
            .limit(page.limit)
            .all(self.db)
            .await?;

        Ok((self.enrich(competitions).await?, total))
    }

    /// Gets the competitions of several pilots, grouped by pilot, longest distance first
    pub async fn get_by_pilot_ids(
        &self,
        pilot_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<Competition>>, DbErr> {
        if pilot_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let competitions = entity::prelude::Competition::find()
            .filter(entity::competition::Column::PilotId.is_in(pilot_ids.iter().copied()))
            .order_by_desc(entity::competition::Column::DistanceInFeet)
            .order_by_asc(entity::competition::Column::Id)
            .all(self.db)
            .await?;

        let mut grouped: HashMap<i32, Vec<Competition>> = HashMap::new();
        for competition in self.enrich(competitions).await? {
            grouped
                .entry(competition.pilot_id)
                .or_default()
                .push(competition);
        }

        Ok(grouped)
    }

    pub async fn update(&self, id: i32, changes: CompetitionChanges) -> Result<Competition, DbErr> {
        entity::competition::ActiveModel {
            id: ActiveValue::Unchanged(id),
            pilot_id: ActiveValue::Set(changes.pilot_id),
            drone_id: ActiveValue::Set(changes.drone_id),
            distance_in_feet: ActiveValue::Set(changes.distance_in_feet),
            distance_achievement_date: ActiveValue::Set(changes.distance_achievement_date),
        }
        .update(self.db)
        .await?;

        self.get_by_id(id).await?.ok_or(DbErr::RecordNotFound(format!(
            "Competition with id {} not found after update",
            id
        )))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Competition::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Builds the filtered, ordered query.
    ///
    /// Drone and pilot name filters are resolved to ids first; names are unique, so each
    /// resolves to at most one row.
    async fn filtered(
        &self,
        filter: &CompetitionFilter,
    ) -> Result<Select<entity::prelude::Competition>, DbErr> {
        use entity::competition::Column;

        let mut query = entity::prelude::Competition::find();

        if let Some(distance) = filter.distance_in_feet {
            query = query.filter(Column::DistanceInFeet.eq(distance));
        }
        if let Some(from) = filter.from_achievement_date {
            query = query.filter(Column::DistanceAchievementDate.gte(from));
        }
        if let Some(to) = filter.to_achievement_date {
            query = query.filter(Column::DistanceAchievementDate.lte(to));
        }
        if let Some(min) = filter.min_distance_in_feet {
            query = query.filter(Column::DistanceInFeet.gte(min));
        }
        if let Some(max) = filter.max_distance_in_feet {
            query = query.filter(Column::DistanceInFeet.lte(max));
        }
        if let Some(drone_name) = &filter.drone_name {
            let drone_ids: Vec<i32> = entity::prelude::Drone::find()
                .filter(entity::drone::Column::Name.eq(drone_name.as_str()))
                .all(self.db)
                .await?
                .into_iter()
                .map(|d| d.id)
                .collect();
            query = query.filter(Column::DroneId.is_in(drone_ids));
        }
        if let Some(pilot_name) = &filter.pilot_name {
            let pilot_ids: Vec<i32> = entity::prelude::Pilot::find()
                .filter(entity::pilot::Column::Name.eq(pilot_name.as_str()))
                .all(self.db)
                .await?
                .into_iter()
                .map(|p| p.id)
                .collect();
            query = query.filter(Column::PilotId.is_in(pilot_ids));
        }

        if filter.ordering.is_empty() {
            query = query.order_by_desc(Column::DistanceInFeet);
        }
        for order in &filter.ordering {
            let column = match order.field {
                CompetitionOrderField::DistanceInFeet => Column::DistanceInFeet,
                CompetitionOrderField::DistanceAchievementDate => Column::DistanceAchievementDate,
            };
            query = query.order_by(column, direction(order.descending));
        }

        Ok(query.order_by_asc(Column::Id))
    }

    /// Resolves pilot and drone names for a batch of competitions
    async fn enrich(
        &self,
        competitions: Vec<entity::competition::Model>,
    ) -> Result<Vec<Competition>, DbErr> {
        if competitions.is_empty() {
            return Ok(Vec::new());
        }

        let pilot_ids: Vec<i32> = competitions.iter().map(|c| c.pilot_id).collect();
        let drone_ids: Vec<i32> = competitions.iter().map(|c| c.drone_id).collect();

        let pilots: HashMap<i32, String> = entity::prelude::Pilot::find()
            .filter(entity::pilot::Column::Id.is_in(pilot_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|p| (p.id, p.name))
            .collect();

        let drones: HashMap<i32, String> = entity::prelude::Drone::find()
            .filter(entity::drone::Column::Id.is_in(drone_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|d| (d.id, d.name))
            .collect();

        competitions
            .into_iter()
            .map(|competition| {
                let pilot = pilots.get(&competition.pilot_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Pilot {} of competition {} not found",
                        competition.pilot_id, competition.id
                    ))
                })?;
                let drone = drones.get(&competition.drone_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Drone {} of competition {} not found",
                        competition.drone_id, competition.id
                    ))
                })?;

                Ok(Competition::from_entity(competition, pilot, drone))
            })
            .collect()
    }
}
