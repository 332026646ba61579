use serde::Deserialize;

use crate::filter::FilterSpec;
use crate::resource::Resource;
use models::errors::ModelError;
use models::financial_category::{self, CategoryKind};

pub struct Categories;

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryInput {
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "tipo", deserialize_with = "common::de::from_str")]
    pub kind: CategoryKind,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryFilter {
    #[serde(rename = "descricao", default, deserialize_with = "common::de::empty_as_none")]
    pub description: Option<String>,
    #[serde(rename = "tipo", default, deserialize_with = "common::de::empty_as_none")]
    pub kind: Option<CategoryKind>,
}

impl Resource for Categories {
    type Entity = financial_category::Entity;
    type Column = financial_category::Column;
    type PrimaryKey = financial_category::PrimaryKey;
    type ActiveModel = financial_category::ActiveModel;
    type Input = CategoryInput;
    type Filter = CategoryFilter;
    type Row = financial_category::Model;

    const NAME: &'static str = "financial_category";

    fn id_column() -> Self::Column {
        financial_category::Column::Id
    }

    fn active_model(input: Self::Input) -> Result<Self::ActiveModel, ModelError> {
        financial_category::new_active(&input.description, input.kind)
    }

    fn filter_spec(filter: &Self::Filter) -> FilterSpec {
        FilterSpec::new()
            .contains(financial_category::Column::Description, filter.description.as_deref())
            .equals(financial_category::Column::Kind, filter.kind.map(|k| k.as_str()))
    }
}
