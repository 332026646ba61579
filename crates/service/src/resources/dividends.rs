use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{EntityTrait, FromQueryResult, JoinType, QuerySelect, RelationTrait, Select};
use serde::{Deserialize, Serialize};

use crate::filter::FilterSpec;
use crate::lookups::Lookup;
use crate::resource::Resource;
use models::{asset, dividend, errors::ModelError};

pub struct Dividends;

#[derive(Debug, Clone, Deserialize)]
pub struct DividendInput {
    #[serde(rename = "ativo_id", deserialize_with = "common::de::from_str")]
    pub asset_id: i32,
    #[serde(rename = "data_pagamento", deserialize_with = "common::de::from_str")]
    pub payment_date: NaiveDate,
    #[serde(rename = "valor_recebido", deserialize_with = "common::de::from_str")]
    pub received_value: Decimal,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DividendFilter {
    #[serde(rename = "ativo_id", default, deserialize_with = "common::de::empty_as_none")]
    pub asset_id: Option<i32>,
    #[serde(default, deserialize_with = "common::de::empty_as_none")]
    pub ticker: Option<String>,
    #[serde(rename = "data_pagamento", default, deserialize_with = "common::de::empty_as_none")]
    pub payment_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, FromQueryResult, Serialize)]
pub struct DividendRow {
    pub id: i32,
    pub asset_id: i32,
    pub ticker: String,
    pub payment_date: NaiveDate,
    pub received_value: Decimal,
}

impl Resource for Dividends {
    type Entity = dividend::Entity;
    type Column = dividend::Column;
    type PrimaryKey = dividend::PrimaryKey;
    type ActiveModel = dividend::ActiveModel;
    type Input = DividendInput;
    type Filter = DividendFilter;
    type Row = DividendRow;

    const NAME: &'static str = "dividend";
    const LOOKUPS: &'static [Lookup] = &[Lookup::Assets];

    fn id_column() -> Self::Column {
        dividend::Column::Id
    }

    fn active_model(input: Self::Input) -> Result<Self::ActiveModel, ModelError> {
        Ok(dividend::new_active(input.asset_id, input.payment_date, input.received_value))
    }

    fn filter_spec(filter: &Self::Filter) -> FilterSpec {
        FilterSpec::new()
            .equals(dividend::Column::AssetId, filter.asset_id)
            .contains(asset::Column::Ticker, filter.ticker.as_deref())
            .equals(dividend::Column::PaymentDate, filter.payment_date)
    }

    fn list_select() -> Select<Self::Entity> {
        dividend::Entity::find()
            .join(JoinType::InnerJoin, dividend::Relation::Asset.def())
            .column_as(asset::Column::Ticker, "ticker")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ServiceError;
    use crate::resource::{create, delete, get_row, list, list_view, update};
    use crate::test_support::{date, get_db, seed_asset, seed_asset_type};

    fn input(asset_id: i32, day: NaiveDate, value: Decimal) -> DividendInput {
        DividendInput { asset_id, payment_date: day, received_value: value }
    }

    #[tokio::test]
    async fn dividends_list_with_ticker_and_asset_lookup() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let reits = seed_asset_type(&db, "REITs").await?;
        let hglg = seed_asset(&db, "HGLG11", reits).await?;
        let id = create::<Dividends>(&db, input(hglg, date(2024, 4, 15), Decimal::new(11050, 2))).await?;

        let view = list_view::<Dividends>(&db, DividendFilter::default()).await?;
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].id, id);
        assert_eq!(view.rows[0].ticker, "HGLG11");
        assert_eq!(view.rows[0].received_value, Decimal::new(11050, 2));
        assert_eq!(view.lookups.assets.len(), 1);
        assert_eq!(view.lookups.assets[0].label, "HGLG11");
        Ok(())
    }

    #[tokio::test]
    async fn filter_by_asset_ticker_and_date() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let reits = seed_asset_type(&db, "REITs").await?;
        let hglg = seed_asset(&db, "HGLG11", reits).await?;
        let knri = seed_asset(&db, "KNRI11", reits).await?;
        create::<Dividends>(&db, input(hglg, date(2024, 4, 15), Decimal::new(11050, 2))).await?;
        create::<Dividends>(&db, input(hglg, date(2024, 5, 15), Decimal::new(10975, 2))).await?;
        create::<Dividends>(&db, input(knri, date(2024, 5, 15), Decimal::new(8025, 2))).await?;

        let rows = list::<Dividends>(&db, &DividendFilter { asset_id: Some(knri), ..Default::default() }).await?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].ticker, "KNRI11");

        let rows = list::<Dividends>(&db, &DividendFilter { ticker: Some("hg".into()), ..Default::default() }).await?;
        assert_eq!(rows.len(), 2);

        let both = DividendFilter { ticker: Some("hg".into()), payment_date: Some(date(2024, 5, 15)), ..Default::default() };
        let rows = list::<Dividends>(&db, &both).await?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].received_value, Decimal::new(10975, 2));
        Ok(())
    }

    #[tokio::test]
    async fn edit_and_delete() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let reits = seed_asset_type(&db, "REITs").await?;
        let hglg = seed_asset(&db, "HGLG11", reits).await?;
        let id = create::<Dividends>(&db, input(hglg, date(2024, 4, 15), Decimal::new(11050, 2))).await?;

        update::<Dividends>(&db, id, input(hglg, date(2024, 4, 16), Decimal::new(11075, 2))).await?;
        let row = get_row::<Dividends>(&db, id).await?;
        assert_eq!(row.payment_date, date(2024, 4, 16));
        assert_eq!(row.received_value, Decimal::new(11075, 2));

        delete::<Dividends>(&db, id).await?;
        assert!(matches!(get_row::<Dividends>(&db, id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
