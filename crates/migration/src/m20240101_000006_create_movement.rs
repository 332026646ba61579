use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Movement::Table)
                    .if_not_exists()
                    .col(pk_auto(Movement::Id))
                    .col(date(Movement::MovementDate).not_null())
                    .col(integer(Movement::CategoryId).not_null())
                    .col(decimal_len(Movement::Value, 14, 2).not_null())
                    .col(string_len_null(Movement::Description, 200))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movement_category")
                            .from(Movement::Table, Movement::CategoryId)
                            .to(FinancialCategory::Table, FinancialCategory::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Movement::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Movement {
    Table,
    Id,
    MovementDate,
    CategoryId,
    Value,
    Description,
}

#[derive(DeriveIden)]
enum FinancialCategory { Table, Id }
