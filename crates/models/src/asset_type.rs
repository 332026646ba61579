use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::{asset, errors::ModelError, fields};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "asset_type")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Asset,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Asset => Entity::has_many(asset::Entity).into() }
    }
}

impl Related<asset::Entity> for Entity {
    fn to() -> RelationDef { Relation::Asset.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn new_active(description: &str) -> Result<ActiveModel, ModelError> {
    Ok(ActiveModel {
        description: Set(fields::required_text("description", description)?),
        ..Default::default()
    })
}
