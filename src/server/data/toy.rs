use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::toy::{Toy, ToyParams};

pub struct ToyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ToyRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: ToyParams) -> Result<Toy, DbErr> {
        let toy = entity::toy::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            toy_category: ActiveValue::Set(params.toy_category),
            release_date: ActiveValue::Set(params.release_date),
            was_included_in_home: ActiveValue::Set(params.was_included_in_home),
            created: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Toy::from_entity(toy))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Toy>, DbErr> {
        Ok(entity::prelude::Toy::find_by_id(id)
            .one(self.db)
            .await?
            .map(Toy::from_entity))
    }

    /// Gets every toy ordered by name
    pub async fn get_all(&self) -> Result<Vec<Toy>, DbErr> {
        Ok(entity::prelude::Toy::find()
            .order_by_asc(entity::toy::Column::Name)
            .order_by_asc(entity::toy::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Toy::from_entity)
            .collect())
    }

    /// Replaces every writable column of a toy
    pub async fn update(&self, id: i32, params: ToyParams) -> Result<Toy, DbErr> {
        let toy = entity::toy::ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            toy_category: ActiveValue::Set(params.toy_category),
            release_date: ActiveValue::Set(params.release_date),
            was_included_in_home: ActiveValue::Set(params.was_included_in_home),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Toy::from_entity(toy))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Toy::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}
