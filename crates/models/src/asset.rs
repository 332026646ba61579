use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::{asset_type, contribution, dividend, errors::ModelError, fields};

/// A tradable instrument identified by its ticker.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "asset")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub ticker: String,
    pub name: Option<String>,
    pub type_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    AssetType,
    Contribution,
    Dividend,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::AssetType => Entity::belongs_to(asset_type::Entity)
                .from(Column::TypeId)
                .to(asset_type::Column::Id)
                .into(),
            Relation::Contribution => Entity::has_many(contribution::Entity).into(),
            Relation::Dividend => Entity::has_many(dividend::Entity).into(),
        }
    }
}

impl Related<asset_type::Entity> for Entity {
    fn to() -> RelationDef { Relation::AssetType.def() }
}

impl Related<contribution::Entity> for Entity {
    fn to() -> RelationDef { Relation::Contribution.def() }
}

impl Related<dividend::Entity> for Entity {
    fn to() -> RelationDef { Relation::Dividend.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Upper-cases the ticker and drops a blank name.
pub fn new_active(ticker: &str, name: Option<&str>, type_id: i32) -> Result<ActiveModel, ModelError> {
    Ok(ActiveModel {
        ticker: Set(fields::ticker(ticker)?),
        name: Set(fields::optional_text(name)),
        type_id: Set(type_id),
        ..Default::default()
    })
}
