use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{EntityTrait, FromQueryResult, JoinType, QuerySelect, RelationTrait, Select};
use serde::{Deserialize, Serialize};

use crate::filter::FilterSpec;
use crate::lookups::Lookup;
use crate::resource::Resource;
use models::{asset, contribution, errors::ModelError};

pub struct Contributions;

#[derive(Debug, Clone, Deserialize)]
pub struct ContributionInput {
    #[serde(rename = "ativo_id", deserialize_with = "common::de::from_str")]
    pub asset_id: i32,
    #[serde(rename = "data_aporte", deserialize_with = "common::de::from_str")]
    pub contribution_date: NaiveDate,
    #[serde(rename = "quantidade", deserialize_with = "common::de::from_str")]
    pub quantity: i32,
    #[serde(rename = "valor_unitario", deserialize_with = "common::de::from_str")]
    pub unit_value: Decimal,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContributionFilter {
    #[serde(rename = "ativo_id", default, deserialize_with = "common::de::empty_as_none")]
    pub asset_id: Option<i32>,
    #[serde(default, deserialize_with = "common::de::empty_as_none")]
    pub ticker: Option<String>,
    #[serde(rename = "data_aporte", default, deserialize_with = "common::de::empty_as_none")]
    pub contribution_date: Option<NaiveDate>,
    #[serde(rename = "quantidade", default, deserialize_with = "common::de::empty_as_none")]
    pub quantity: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, FromQueryResult, Serialize)]
pub struct ContributionRow {
    pub id: i32,
    pub asset_id: i32,
    pub ticker: String,
    pub contribution_date: NaiveDate,
    pub quantity: i32,
    pub unit_value: Decimal,
}

impl Resource for Contributions {
    type Entity = contribution::Entity;
    type Column = contribution::Column;
    type PrimaryKey = contribution::PrimaryKey;
    type ActiveModel = contribution::ActiveModel;
    type Input = ContributionInput;
    type Filter = ContributionFilter;
    type Row = ContributionRow;

    const NAME: &'static str = "contribution";
    const LOOKUPS: &'static [Lookup] = &[Lookup::Assets];

    fn id_column() -> Self::Column {
        contribution::Column::Id
    }

    fn active_model(input: Self::Input) -> Result<Self::ActiveModel, ModelError> {
        Ok(contribution::new_active(input.asset_id, input.contribution_date, input.quantity, input.unit_value))
    }

    fn filter_spec(filter: &Self::Filter) -> FilterSpec {
        FilterSpec::new()
            .equals(contribution::Column::AssetId, filter.asset_id)
            .contains(asset::Column::Ticker, filter.ticker.as_deref())
            .equals(contribution::Column::ContributionDate, filter.contribution_date)
            .equals(contribution::Column::Quantity, filter.quantity)
    }

    fn list_select() -> Select<Self::Entity> {
        contribution::Entity::find()
            .join(JoinType::InnerJoin, contribution::Relation::Asset.def())
            .column_as(asset::Column::Ticker, "ticker")
    }
}
