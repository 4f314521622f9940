use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Toy::Table)
                    .if_not_exists()
                    .col(pk_auto(Toy::Id))
                    .col(string(Toy::Name))
                    .col(string(Toy::Description))
                    .col(string(Toy::ToyCategory))
                    .col(timestamp_with_time_zone(Toy::ReleaseDate))
                    .col(boolean(Toy::WasIncludedInHome))
                    .col(timestamp_with_time_zone(Toy::Created))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Toy::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Toy {
    Table,
    Id,
    Name,
    Description,
    ToyCategory,
    ReleaseDate,
    WasIncludedInHome,
    Created,
}
