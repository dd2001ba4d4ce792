//! Create `rider` table.
//!
//! `score` is a JSON array holding the rider's distinct score values.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rider::Table)
                    .if_not_exists()
                    .col(uuid(Rider::Id).primary_key())
                    .col(string_len(Rider::FirstName, 128).not_null())
                    .col(string_len(Rider::LastName, 128).not_null())
                    .col(integer(Rider::Age).not_null())
                    .col(json(Rider::Score).not_null())
                    .col(timestamp_with_time_zone(Rider::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Rider::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Rider::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Rider { Table, Id, FirstName, LastName, Age, Score, CreatedAt, UpdatedAt }
