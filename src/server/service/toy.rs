use sea_orm::DatabaseConnection;

use crate::server::{
    data::toy::ToyRepository,
    error::AppError,
    model::toy::{Toy, ToyParams},
    util::validate::FieldErrors,
};

pub struct ToyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ToyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: ToyParams) -> Result<Toy, AppError> {
        validate(&params)?;

        let toy = ToyRepository::new(self.db).create(params).await?;

        tracing::info!(id = toy.id, name = %toy.name, "created toy");

        Ok(toy)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Toy>, AppError> {
        Ok(ToyRepository::new(self.db).get_by_id(id).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<Toy>, AppError> {
        Ok(ToyRepository::new(self.db).get_all().await?)
    }

    /// Replaces every writable field of an existing toy
    pub async fn update(&self, id: i32, params: ToyParams) -> Result<Toy, AppError> {
        validate(&params)?;

        Ok(ToyRepository::new(self.db).update(id, params).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        ToyRepository::new(self.db).delete(id).await?;

        tracing::info!(id, "deleted toy");

        Ok(())
    }
}

fn validate(params: &ToyParams) -> Result<(), AppError> {
    let mut errors = FieldErrors::new();

    errors.check_length("name", &params.name, 150);
    errors.check_max_length("description", &params.description, 250);
    errors.check_length("toy_category", &params.toy_category, 200);

    errors.finish()
}
