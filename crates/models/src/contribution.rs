use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::asset;

/// A purchase of `quantity` units of an asset at `unit_value` each.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contribution")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub asset_id: i32,
    pub contribution_date: Date,
    pub quantity: i32,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))")]
    pub unit_value: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Asset,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Asset => Entity::belongs_to(asset::Entity)
                .from(Column::AssetId)
                .to(asset::Column::Id)
                .into(),
        }
    }
}

impl Related<asset::Entity> for Entity {
    fn to() -> RelationDef { Relation::Asset.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn new_active(asset_id: i32, contribution_date: Date, quantity: i32, unit_value: Decimal) -> ActiveModel {
    ActiveModel {
        asset_id: Set(asset_id),
        contribution_date: Set(contribution_date),
        quantity: Set(quantity),
        unit_value: Set(unit_value),
        ..Default::default()
    }
}
