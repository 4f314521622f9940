use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::{
        list::{Page, PageRequest},
        user::{CreateUserParams, RegisteredUser, UpdateUserParams, User},
    },
    service::{token::TokenService, unique_field_error},
    util::validate::FieldErrors,
};

const USERNAME_MAX_LENGTH: usize = 150;
const USERNAME_TAKEN: &str = "A user with that username already exists.";

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user and issues their first API token.
    ///
    /// # Returns
    /// - `Ok(RegisteredUser)` - Created user and the token key
    /// - `Err(AppError::Validation)` - Invalid or duplicate username
    pub async fn register(&self, params: CreateUserParams) -> Result<RegisteredUser, AppError> {
        let username = params.username.trim().to_string();
        self.validate(&username, None).await?;

        let user = UserRepository::new(self.db)
            .create(username)
            .await
            .map_err(|e| unique_field_error(e, "username", USERNAME_TAKEN))?;

        let token = TokenService::new(self.db).issue(user.id).await?;

        tracing::info!(id = user.id, username = %user.username, "registered user");

        Ok(RegisteredUser { user, token })
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        Ok(UserRepository::new(self.db).get_by_id(id).await?)
    }

    pub async fn get_paginated(&self, page: PageRequest) -> Result<Page<User>, AppError> {
        let (users, total) = UserRepository::new(self.db).get_paginated(page).await?;

        Ok(Page::new(users, total, page))
    }

    pub async fn update(&self, existing: User, params: UpdateUserParams) -> Result<User, AppError> {
        let username = params
            .username
            .map(|u| u.trim().to_string())
            .unwrap_or(existing.username);
        self.validate(&username, Some(existing.id)).await?;

        Ok(UserRepository::new(self.db)
            .update(existing.id, username)
            .await
            .map_err(|e| unique_field_error(e, "username", USERNAME_TAKEN))?)
    }

    /// Deletes a user together with their token and drones
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        UserRepository::new(self.db).delete(id).await?;

        tracing::info!(id, "deleted user");

        Ok(())
    }

    async fn validate(&self, username: &str, exclude_id: Option<i32>) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();

        errors.check_length("username", username, USERNAME_MAX_LENGTH);
        if !errors.contains("username") && !is_valid_username(username) {
            errors.add(
                "username",
                "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters.",
            );
        }
        if !errors.contains("username")
            && UserRepository::new(self.db)
                .username_exists(username, exclude_id)
                .await?
        {
            errors.add("username", USERNAME_TAKEN);
        }

        errors.finish()
    }
}

fn is_valid_username(username: &str) -> bool {
    username
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'))
}
