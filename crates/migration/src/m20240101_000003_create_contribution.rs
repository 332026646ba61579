//! Create `contribution` table: purchases of an asset (quantity at a unit
//! value on a date).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contribution::Table)
                    .if_not_exists()
                    .col(pk_auto(Contribution::Id))
                    .col(integer(Contribution::AssetId).not_null())
                    .col(date(Contribution::ContributionDate).not_null())
                    .col(integer(Contribution::Quantity).not_null())
                    .col(decimal_len(Contribution::UnitValue, 14, 2).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contribution_asset")
                            .from(Contribution::Table, Contribution::AssetId)
                            .to(Asset::Table, Asset::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Contribution::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Contribution {
    Table,
    Id,
    AssetId,
    ContributionDate,
    Quantity,
    UnitValue,
}

#[derive(DeriveIden)]
enum Asset { Table, Id }
