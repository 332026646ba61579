use sea_orm::{EntityTrait, FromQueryResult, JoinType, QuerySelect, RelationTrait, Select};
use serde::{Deserialize, Serialize};

use crate::filter::FilterSpec;
use crate::lookups::Lookup;
use crate::resource::Resource;
use models::{asset, asset_type, errors::ModelError};

pub struct Assets;

#[derive(Debug, Clone, Deserialize)]
pub struct AssetInput {
    pub ticker: String,
    #[serde(rename = "nome", default, deserialize_with = "common::de::empty_as_none")]
    pub name: Option<String>,
    #[serde(rename = "tipo_id", deserialize_with = "common::de::from_str")]
    pub type_id: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetFilter {
    #[serde(default, deserialize_with = "common::de::empty_as_none")]
    pub ticker: Option<String>,
    #[serde(rename = "nome", default, deserialize_with = "common::de::empty_as_none")]
    pub name: Option<String>,
    #[serde(rename = "tipo_id", default, deserialize_with = "common::de::empty_as_none")]
    pub type_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, FromQueryResult, Serialize)]
pub struct AssetRow {
    pub id: i32,
    pub ticker: String,
    pub name: Option<String>,
    pub type_id: i32,
    pub type_description: String,
}

impl Resource for Assets {
    type Entity = asset::Entity;
    type Column = asset::Column;
    type PrimaryKey = asset::PrimaryKey;
    type ActiveModel = asset::ActiveModel;
    type Input = AssetInput;
    type Filter = AssetFilter;
    type Row = AssetRow;

    const NAME: &'static str = "asset";
    const LOOKUPS: &'static [Lookup] = &[Lookup::AssetTypes];

    fn id_column() -> Self::Column {
        asset::Column::Id
    }

    fn active_model(input: Self::Input) -> Result<Self::ActiveModel, ModelError> {
        asset::new_active(&input.ticker, input.name.as_deref(), input.type_id)
    }

    fn filter_spec(filter: &Self::Filter) -> FilterSpec {
        FilterSpec::new()
            .contains(asset::Column::Ticker, filter.ticker.as_deref())
            .contains(asset::Column::Name, filter.name.as_deref())
            .equals(asset::Column::TypeId, filter.type_id)
    }

    fn list_select() -> Select<Self::Entity> {
        asset::Entity::find()
            .join(JoinType::InnerJoin, asset::Relation::AssetType.def())
            .column_as(asset_type::Column::Description, "type_description")
    }
}
