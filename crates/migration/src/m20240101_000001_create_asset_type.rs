//! Create `asset_type` table.
//!
//! User-defined labels for assets ("Stocks", "REITs"); referenced by `asset`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AssetType::Table)
                    .if_not_exists()
                    .col(pk_auto(AssetType::Id))
                    .col(string_len(AssetType::Description, 30).unique_key().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(AssetType::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum AssetType { Table, Id, Description }
