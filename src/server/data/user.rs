use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    data::drone::DroneRepository,
    model::{list::PageRequest, user::User},
};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, username: String) -> Result<User, DbErr> {
        let user = entity::user::ActiveModel {
            username: ActiveValue::Set(username),
            date_joined: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(user, Vec::new()))
    }

    /// Gets a user by ID with the drones they own
    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut drones = DroneRepository::new(self.db)
            .get_by_owner_ids(&[user.id])
            .await?;
        let drones = drones.remove(&user.id).unwrap_or_default();

        Ok(Some(User::from_entity(user, drones)))
    }

    /// Checks whether another user already uses `username`, ignoring `exclude_id`
    pub async fn username_exists(
        &self,
        username: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username));

        if let Some(id) = exclude_id {
            query = query.filter(entity::user::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Gets one page of users ordered by username, with the total count
    pub async fn get_paginated(&self, page: PageRequest) -> Result<(Vec<User>, u64), DbErr> {
        let query = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Username)
            .order_by_asc(entity::user::Column::Id);

        let total = query.clone().count(self.db).await?;

        let users = query
            .offset(page.offset)
            .limit(page.limit)
            .all(self.db)
            .await?;

        let ids: Vec<i32> = users.iter().map(|u| u.id).collect();
        let mut drones = DroneRepository::new(self.db).get_by_owner_ids(&ids).await?;

        let users = users
            .into_iter()
            .map(|user| {
                let owned = drones.remove(&user.id).unwrap_or_default();
                User::from_entity(user, owned)
            })
            .collect();

        Ok((users, total))
    }

    pub async fn update(&self, id: i32, username: String) -> Result<User, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::Unchanged(id),
            username: ActiveValue::Set(username),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        self.get_by_id(id).await?.ok_or(DbErr::RecordNotFound(format!(
            "User with id {} not found after update",
            id
        )))
    }

    /// Deletes a user; their token and drones cascade
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}
