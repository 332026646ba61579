use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::asset;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "dividend")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub asset_id: i32,
    pub payment_date: Date,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))")]
    pub received_value: Decimal,
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

pub fn new_active(asset_id: i32, payment_date: Date, received_value: Decimal) -> ActiveModel {
    ActiveModel {
        asset_id: Set(asset_id),
        payment_date: Set(payment_date),
        received_value: Set(received_value),
        ..Default::default()
    }
}
