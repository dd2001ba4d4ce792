use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Motorcycle: lookups by owning rider
        manager
            .create_index(
                Index::create()
                    .name("idx_motorcycle_rider")
                    .table(Motorcycle::Table)
                    .col(Motorcycle::RiderId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Rider: listing is ordered by creation time
        manager
            .create_index(
                Index::create()
                    .name("idx_rider_created_at")
                    .table(Rider::Table)
                    .col(Rider::CreatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_rider_created_at").table(Rider::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_motorcycle_rider").table(Motorcycle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Motorcycle { Table, RiderId }

#[derive(DeriveIden)]
enum Rider { Table, CreatedAt }
