use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::middleware::access::Identity;

pub struct TokenRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TokenRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves a token key to the identity of the user it belongs to.
    pub async fn find_identity(&self, key: &str) -> Result<Option<Identity>, DbErr> {
        let result = entity::prelude::Token::find()
            .filter(entity::token::Column::Key.eq(key))
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(result.and_then(|(_, user)| {
            user.map(|user| Identity {
                user_id: user.id,
                username: user.username,
            })
        }))
    }

    pub async fn find_by_user(&self, user_id: i32) -> Result<Option<entity::token::Model>, DbErr> {
        entity::prelude::Token::find()
            .filter(entity::token::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Creates a token for a user who has none.
    pub async fn create(&self, user_id: i32, key: String) -> Result<entity::token::Model, DbErr> {
        entity::token::ActiveModel {
            key: ActiveValue::Set(key),
            user_id: ActiveValue::Set(user_id),
            created: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Replaces a user's token key, creating the token if the user has none.
    ///
    /// The old key stops resolving as soon as this returns.
    pub async fn replace(&self, user_id: i32, key: String) -> Result<entity::token::Model, DbErr> {
        match self.find_by_user(user_id).await? {
            Some(existing) => {
                let mut active: entity::token::ActiveModel = existing.into();
                active.key = ActiveValue::Set(key);
                active.created = ActiveValue::Set(Utc::now());
                active.update(self.db).await
            }
            None => self.create(user_id, key).await,
        }
    }
}
