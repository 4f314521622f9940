//! Token factory for creating API tokens in tests.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating API tokens bound to a user.
pub struct TokenFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    key: String,
}

impl<'a> TokenFactory<'a> {
    /// Creates a new TokenFactory for the given user.
    ///
    /// Defaults:
    /// - key: 40-character zero-padded counter value, unique per process
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            key: format!("{:040x}", next_id()),
        }
    }

    /// Sets the token key.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Builds and inserts the token entity into the database.
    pub async fn build(self) -> Result<entity::token::Model, DbErr> {
        entity::token::ActiveModel {
            key: ActiveValue::Set(self.key),
            user_id: ActiveValue::Set(self.user_id),
            created: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a token with a generated key for the given user.
pub async fn create_token(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::token::Model, DbErr> {
    TokenFactory::new(db, user_id).build().await
}
