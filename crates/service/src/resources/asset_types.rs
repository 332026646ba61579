use serde::Deserialize;

use crate::filter::FilterSpec;
use crate::resource::Resource;
use models::{asset_type, errors::ModelError};

pub struct AssetTypes;

#[derive(Debug, Clone, Deserialize)]
pub struct AssetTypeInput {
    #[serde(alias = "descricao")]
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetTypeFilter {
    #[serde(default, alias = "descricao", deserialize_with = "common::de::empty_as_none")]
    pub description: Option<String>,
}

impl Resource for AssetTypes {
    type Entity = asset_type::Entity;
    type Column = asset_type::Column;
    type PrimaryKey = asset_type::PrimaryKey;
    type ActiveModel = asset_type::ActiveModel;
    type Input = AssetTypeInput;
    type Filter = AssetTypeFilter;
    type Row = asset_type::Model;

    const NAME: &'static str = "asset_type";

    fn id_column() -> Self::Column {
        asset_type::Column::Id
    }

    fn active_model(input: Self::Input) -> Result<Self::ActiveModel, ModelError> {
        asset_type::new_active(&input.description)
    }

    fn filter_spec(filter: &Self::Filter) -> FilterSpec {
        FilterSpec::new().contains(asset_type::Column::Description, filter.description.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ServiceError;
    use crate::resource::{create, delete, get, list, update};
    use crate::test_support::get_db;

    fn input(description: &str) -> AssetTypeInput {
        AssetTypeInput { description: description.to_string() }
    }

    fn by_description(text: &str) -> AssetTypeFilter {
        AssetTypeFilter { description: Some(text.to_string()) }
    }

    #[tokio::test]
    async fn created_type_is_listed_once() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let id = create::<AssetTypes>(&db, input("  Stocks ")).await?;

        let rows = list::<AssetTypes>(&db, &AssetTypeFilter::default()).await?;
        assert_eq!(rows.iter().filter(|r| r.id == id).count(), 1);
        assert_eq!(rows[0].description, "Stocks");
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_description_is_rejected() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        create::<AssetTypes>(&db, input("Stocks")).await?;
        create::<AssetTypes>(&db, input("Bonds")).await?;

        let dup = create::<AssetTypes>(&db, input("Stocks")).await;
        assert!(matches!(dup, Err(ServiceError::Db(_))));
        assert_eq!(list::<AssetTypes>(&db, &AssetTypeFilter::default()).await?.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn blank_description_never_reaches_the_database() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let res = create::<AssetTypes>(&db, input("   ")).await;
        assert!(matches!(res, Err(ServiceError::Model(ModelError::Validation(_)))));
        assert!(list::<AssetTypes>(&db, &AssetTypeFilter::default()).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn description_filter_is_case_insensitive_substring() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        create::<AssetTypes>(&db, input("Stocks")).await?;
        create::<AssetTypes>(&db, input("REITs")).await?;
        create::<AssetTypes>(&db, input("Bonds")).await?;

        let rows = list::<AssetTypes>(&db, &by_description("ST")).await?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].description, "Stocks");

        let rows = list::<AssetTypes>(&db, &by_description("s")).await?;
        assert_eq!(rows.len(), 3);

        let rows = list::<AssetTypes>(&db, &by_description("crypto")).await?;
        assert!(rows.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn description_filter_matches_accented_text() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        create::<AssetTypes>(&db, input("AÇÕES")).await?;
        create::<AssetTypes>(&db, input("Bonds")).await?;

        let rows = list::<AssetTypes>(&db, &by_description("AÇÕES")).await?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].description, "AÇÕES");

        // ASCII letters still fold around accented ones
        let rows = list::<AssetTypes>(&db, &by_description("aÇÕes")).await?;
        assert_eq!(rows.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn like_wildcards_in_filter_match_literally() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        create::<AssetTypes>(&db, input("Stocks")).await?;
        create::<AssetTypes>(&db, input("Bonds")).await?;
        create::<AssetTypes>(&db, input("Fixed_Income 100%")).await?;

        let rows = list::<AssetTypes>(&db, &by_description("%")).await?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].description, "Fixed_Income 100%");

        let rows = list::<AssetTypes>(&db, &by_description("_")).await?;
        assert_eq!(rows.len(), 1);

        assert!(list::<AssetTypes>(&db, &by_description("S_ocks")).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn list_is_most_recent_first() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let first = create::<AssetTypes>(&db, input("Stocks")).await?;
        let second = create::<AssetTypes>(&db, input("Bonds")).await?;

        let ids: Vec<i32> = list::<AssetTypes>(&db, &AssetTypeFilter::default()).await?.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![second, first]);
        Ok(())
    }

    #[tokio::test]
    async fn edit_replaces_and_delete_removes() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let id = create::<AssetTypes>(&db, input("Stoks")).await?;

        assert_eq!(update::<AssetTypes>(&db, id, input("Stocks")).await?, 1);
        assert_eq!(get::<AssetTypes>(&db, id).await?.map(|m| m.description), Some("Stocks".to_string()));

        assert_eq!(update::<AssetTypes>(&db, id + 100, input("Ghost")).await?, 0);

        assert_eq!(delete::<AssetTypes>(&db, id).await?, 1);
        assert!(get::<AssetTypes>(&db, id).await?.is_none());
        Ok(())
    }
}
