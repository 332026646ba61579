use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Asset::Table)
                    .if_not_exists()
                    .col(pk_auto(Asset::Id))
                    .col(string_len(Asset::Ticker, 10).unique_key().not_null())
                    .col(string_len_null(Asset::Name, 100))
                    .col(integer(Asset::TypeId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_asset_type")
                            .from(Asset::Table, Asset::TypeId)
                            .to(AssetType::Table, AssetType::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Asset::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Asset { Table, Id, Ticker, Name, TypeId }

#[derive(DeriveIden)]
enum AssetType { Table, Id }
