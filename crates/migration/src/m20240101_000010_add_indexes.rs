use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Asset: lookups by type
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_asset_type_id")
                    .table(Asset::Table)
                    .col(Asset::TypeId)
                    .to_owned(),
            )
            .await?;

        // Contribution / Dividend: filter and join on asset
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_contribution_asset_id")
                    .table(Contribution::Table)
                    .col(Contribution::AssetId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_dividend_asset_id")
                    .table(Dividend::Table)
                    .col(Dividend::AssetId)
                    .to_owned(),
            )
            .await?;

        // Movement: filter and join on category
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_movement_category_id")
                    .table(Movement::Table)
                    .col(Movement::CategoryId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_asset_type_id").table(Asset::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_contribution_asset_id").table(Contribution::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_dividend_asset_id").table(Dividend::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_movement_category_id").table(Movement::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Asset { Table, TypeId }

#[derive(DeriveIden)]
enum Contribution { Table, AssetId }

#[derive(DeriveIden)]
enum Dividend { Table, AssetId }

#[derive(DeriveIden)]
enum Movement { Table, CategoryId }
