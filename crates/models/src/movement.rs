use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::{fields, financial_category};

/// A dated cash-flow entry classified by a financial category.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "movement")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub movement_date: Date,
    pub category_id: i32,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))")]
    pub value: Decimal,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    FinancialCategory,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::FinancialCategory => Entity::belongs_to(financial_category::Entity)
                .from(Column::CategoryId)
                .to(financial_category::Column::Id)
                .into(),
        }
    }
}

impl Related<financial_category::Entity> for Entity {
    fn to() -> RelationDef { Relation::FinancialCategory.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn new_active(movement_date: Date, category_id: i32, value: Decimal, description: Option<&str>) -> ActiveModel {
    ActiveModel {
        movement_date: Set(movement_date),
        category_id: Set(category_id),
        value: Set(value),
        description: Set(fields::optional_text(description)),
        ..Default::default()
    }
}
