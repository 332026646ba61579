use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Dividend::Table)
                    .if_not_exists()
                    .col(pk_auto(Dividend::Id))
                    .col(integer(Dividend::AssetId).not_null())
                    .col(date(Dividend::PaymentDate).not_null())
                    .col(decimal_len(Dividend::ReceivedValue, 14, 2).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dividend_asset")
                            .from(Dividend::Table, Dividend::AssetId)
                            .to(Asset::Table, Asset::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Dividend::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Dividend { Table, Id, AssetId, PaymentDate, ReceivedValue }

#[derive(DeriveIden)]
enum Asset { Table, Id }
