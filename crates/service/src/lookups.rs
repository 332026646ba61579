//! Dropdown data for the create and edit forms.
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use serde::Serialize;

use crate::errors::ServiceError;
use models::{asset, asset_type, financial_category};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    AssetTypes,
    Assets,
    Categories,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupOption {
    pub id: i32,
    pub label: String,
    /// Secondary text: the asset name or the category kind.
    pub hint: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Lookups {
    pub asset_types: Vec<LookupOption>,
    pub assets: Vec<LookupOption>,
    pub categories: Vec<LookupOption>,
}

/// Loads only the requested collections, each ordered by label.
pub async fn load(db: &DatabaseConnection, wanted: &[Lookup]) -> Result<Lookups, ServiceError> {
    let mut out = Lookups::default();
    for lookup in wanted {
        match lookup {
            Lookup::AssetTypes => {
                out.asset_types = asset_type::Entity::find()
                    .order_by_asc(asset_type::Column::Description)
                    .all(db)
                    .await?
                    .into_iter()
                    .map(|t| LookupOption { id: t.id, label: t.description, hint: None })
                    .collect();
            }
            Lookup::Assets => {
                out.assets = asset::Entity::find()
                    .order_by_asc(asset::Column::Ticker)
                    .all(db)
                    .await?
                    .into_iter()
                    .map(|a| LookupOption { id: a.id, label: a.ticker, hint: a.name })
                    .collect();
            }
            Lookup::Categories => {
                out.categories = financial_category::Entity::find()
                    .order_by_asc(financial_category::Column::Description)
                    .all(db)
                    .await?
                    .into_iter()
                    .map(|c| LookupOption { id: c.id, label: c.description, hint: Some(c.kind.to_string()) })
                    .collect();
            }
        }
    }
    Ok(out)
}
