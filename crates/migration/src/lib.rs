//! Migrator creating the ledger schema in dependency order: parents before
//! the tables that reference them. Indexes are applied last.
//!
//! Every statement is `IF NOT EXISTS`, so running `Migrator::up` against a
//! database that already holds the tables is a no-op.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_asset_type;
mod m20240101_000002_create_asset;
mod m20240101_000003_create_contribution;
mod m20240101_000004_create_dividend;
mod m20240101_000005_create_financial_category;
mod m20240101_000006_create_movement;
mod m20240101_000010_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_asset_type::Migration),
            Box::new(m20240101_000002_create_asset::Migration),
            Box::new(m20240101_000003_create_contribution::Migration),
            Box::new(m20240101_000004_create_dividend::Migration),
            Box::new(m20240101_000005_create_financial_category::Migration),
            Box::new(m20240101_000006_create_movement::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000010_add_indexes::Migration),
        ]
    }
}
