use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{EntityTrait, FromQueryResult, JoinType, QuerySelect, RelationTrait, Select};
use serde::{Deserialize, Serialize};

use crate::filter::FilterSpec;
use crate::lookups::Lookup;
use crate::resource::Resource;
use models::errors::ModelError;
use models::financial_category::{self, CategoryKind};
use models::movement;

pub struct Movements;

#[derive(Debug, Clone, Deserialize)]
pub struct MovementInput {
    #[serde(rename = "data_movimento", deserialize_with = "common::de::from_str")]
    pub movement_date: NaiveDate,
    #[serde(rename = "categoria_id", deserialize_with = "common::de::from_str")]
    pub category_id: i32,
    #[serde(rename = "valor", deserialize_with = "common::de::from_str")]
    pub value: Decimal,
    #[serde(rename = "descricao", default, deserialize_with = "common::de::empty_as_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovementFilter {
    #[serde(rename = "data_movimento", default, deserialize_with = "common::de::empty_as_none")]
    pub movement_date: Option<NaiveDate>,
    #[serde(rename = "categoria_id", default, deserialize_with = "common::de::empty_as_none")]
    pub category_id: Option<i32>,
    /// Kind of the movement's category.
    #[serde(rename = "tipo", default, deserialize_with = "common::de::empty_as_none")]
    pub kind: Option<CategoryKind>,
    #[serde(rename = "descricao", default, deserialize_with = "common::de::empty_as_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, FromQueryResult, Serialize)]
pub struct MovementRow {
    pub id: i32,
    pub movement_date: NaiveDate,
    pub category_id: i32,
    pub category_description: String,
    pub category_kind: CategoryKind,
    pub value: Decimal,
    pub description: Option<String>,
}

impl Resource for Movements {
    type Entity = movement::Entity;
    type Column = movement::Column;
    type PrimaryKey = movement::PrimaryKey;
    type ActiveModel = movement::ActiveModel;
    type Input = MovementInput;
    type Filter = MovementFilter;
    type Row = MovementRow;

    const NAME: &'static str = "movement";
    const LOOKUPS: &'static [Lookup] = &[Lookup::Categories];

    fn id_column() -> Self::Column {
        movement::Column::Id
    }

    fn active_model(input: Self::Input) -> Result<Self::ActiveModel, ModelError> {
        Ok(movement::new_active(input.movement_date, input.category_id, input.value, input.description.as_deref()))
    }

    fn filter_spec(filter: &Self::Filter) -> FilterSpec {
        FilterSpec::new()
            .equals(movement::Column::MovementDate, filter.movement_date)
            .equals(movement::Column::CategoryId, filter.category_id)
            .equals(financial_category::Column::Kind, filter.kind.map(|k| k.as_str()))
            .contains(movement::Column::Description, filter.description.as_deref())
    }

    fn list_select() -> Select<Self::Entity> {
        movement::Entity::find()
            .join(JoinType::InnerJoin, movement::Relation::FinancialCategory.def())
            .column_as(financial_category::Column::Description, "category_description")
            .column_as(financial_category::Column::Kind, "category_kind")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ServiceError;
    use crate::resource::{create, delete, get_row, list, list_view, update};
    use crate::test_support::{date, get_db, seed_category};

    fn input(day: NaiveDate, category_id: i32, value: Decimal, description: Option<&str>) -> MovementInput {
        MovementInput { movement_date: day, category_id, value, description: description.map(str::to_string) }
    }

    #[tokio::test]
    async fn movement_rows_carry_category_label_and_kind() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let salary = seed_category(&db, "Salary", CategoryKind::Income).await?;
        let id = create::<Movements>(&db, input(date(2024, 1, 5), salary, Decimal::new(500050, 2), Some(" January "))).await?;

        let view = list_view::<Movements>(&db, MovementFilter::default()).await?;
        assert_eq!(view.lookups.categories.len(), 1);
        assert_eq!(
            view.rows,
            vec![MovementRow {
                id,
                movement_date: date(2024, 1, 5),
                category_id: salary,
                category_description: "Salary".into(),
                category_kind: CategoryKind::Income,
                value: Decimal::new(500050, 2),
                description: Some("January".into()),
            }]
        );
        Ok(())
    }

    #[tokio::test]
    async fn filter_by_category_kind_date_and_text() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let salary = seed_category(&db, "Salary", CategoryKind::Income).await?;
        let rent = seed_category(&db, "Rent", CategoryKind::Expense).await?;
        create::<Movements>(&db, input(date(2024, 1, 5), salary, Decimal::new(500050, 2), Some("January pay"))).await?;
        create::<Movements>(&db, input(date(2024, 1, 10), rent, Decimal::new(150075, 2), Some("January rent"))).await?;
        create::<Movements>(&db, input(date(2024, 2, 10), rent, Decimal::new(150075, 2), None)).await?;

        let expenses = MovementFilter { kind: Some(CategoryKind::Expense), ..Default::default() };
        let rows = list::<Movements>(&db, &expenses).await?;
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.category_id == rent));

        let by_category = MovementFilter { category_id: Some(salary), ..Default::default() };
        assert_eq!(list::<Movements>(&db, &by_category).await?.len(), 1);

        let by_day = MovementFilter { movement_date: Some(date(2024, 1, 10)), ..Default::default() };
        let rows = list::<Movements>(&db, &by_day).await?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].description.as_deref(), Some("January rent"));

        // matches the movement's own description, not the category's
        let by_text = MovementFilter { description: Some("JANUARY".into()), ..Default::default() };
        assert_eq!(list::<Movements>(&db, &by_text).await?.len(), 2);
        let by_text = MovementFilter { description: Some("salary".into()), ..Default::default() };
        assert!(list::<Movements>(&db, &by_text).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn edit_clears_description_and_moves_category() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let salary = seed_category(&db, "Salary", CategoryKind::Income).await?;
        let rent = seed_category(&db, "Rent", CategoryKind::Expense).await?;
        let id = create::<Movements>(&db, input(date(2024, 1, 5), salary, Decimal::new(10050, 2), Some("typo"))).await?;

        update::<Movements>(&db, id, input(date(2024, 1, 6), rent, Decimal::new(-9925, 2), None)).await?;
        let row = get_row::<Movements>(&db, id).await?;
        assert_eq!(row.movement_date, date(2024, 1, 6));
        assert_eq!(row.category_id, rent);
        assert_eq!(row.category_kind, CategoryKind::Expense);
        assert_eq!(row.value, Decimal::new(-9925, 2));
        assert_eq!(row.description, None);
        Ok(())
    }

    #[tokio::test]
    async fn category_in_use_cannot_be_deleted() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let rent = seed_category(&db, "Rent", CategoryKind::Expense).await?;
        let id = create::<Movements>(&db, input(date(2024, 1, 10), rent, Decimal::new(150075, 2), None)).await?;

        let res = delete::<crate::resources::Categories>(&db, rent).await;
        assert!(matches!(res, Err(ServiceError::Db(_))));

        delete::<Movements>(&db, id).await?;
        delete::<crate::resources::Categories>(&db, rent).await?;
        Ok(())
    }
}
