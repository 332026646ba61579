#![cfg(test)]
use sea_orm::DatabaseConnection;
use models::db::{init, DatabaseConfig};

/// A freshly migrated in-memory database, private to the calling test.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    init(&DatabaseConfig::in_memory()).await
}

pub async fn seed_asset_type(db: &DatabaseConnection, description: &str) -> Result<i32, anyhow::Error> {
    use crate::resources::asset_types::{AssetTypeInput, AssetTypes};
    let input = AssetTypeInput { description: description.to_string() };
    Ok(crate::resource::create::<AssetTypes>(db, input).await?)
}

pub async fn seed_asset(db: &DatabaseConnection, ticker: &str, type_id: i32) -> Result<i32, anyhow::Error> {
    use crate::resources::assets::{AssetInput, Assets};
    let input = AssetInput { ticker: ticker.to_string(), name: None, type_id };
    Ok(crate::resource::create::<Assets>(db, input).await?)
}

pub async fn seed_category(
    db: &DatabaseConnection,
    description: &str,
    kind: models::financial_category::CategoryKind,
) -> Result<i32, anyhow::Error> {
    use crate::resources::categories::{Categories, CategoryInput};
    let input = CategoryInput { description: description.to_string(), kind };
    Ok(crate::resource::create::<Categories>(db, input).await?)
}

pub fn date(y: i32, m: u32, d: u32) -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}
