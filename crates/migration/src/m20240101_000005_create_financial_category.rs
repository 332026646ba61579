//! Create `financial_category` table.
//!
//! `kind` is free text at the column level; the CHECK constraint is the only
//! thing keeping it to the two allowed values.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FinancialCategory::Table)
                    .if_not_exists()
                    .col(pk_auto(FinancialCategory::Id))
                    .col(string_len(FinancialCategory::Description, 50).unique_key().not_null())
                    .col(
                        string_len(FinancialCategory::Kind, 10)
                            .not_null()
                            .check(Expr::col(FinancialCategory::Kind).is_in(["INCOME", "EXPENSE"])),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(FinancialCategory::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum FinancialCategory { Table, Id, Description, Kind }
