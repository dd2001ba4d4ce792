//! Create `motorcycle` table.
//!
//! `rider_id` is a soft reference: there is deliberately no foreign key to
//! `rider`, so motorcycles may point at riders that never existed or were deleted.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Motorcycle::Table)
                    .if_not_exists()
                    .col(uuid(Motorcycle::Id).primary_key())
                    .col(string_len(Motorcycle::Manufacturer, 128).not_null())
                    .col(integer(Motorcycle::Displacement).not_null())
                    .col(double(Motorcycle::Weight).not_null())
                    .col(uuid(Motorcycle::RiderId).not_null())
                    .col(timestamp_with_time_zone(Motorcycle::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Motorcycle::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Motorcycle { Table, Id, Manufacturer, Displacement, Weight, RiderId, CreatedAt }
