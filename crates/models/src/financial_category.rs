use std::fmt;
use std::str::FromStr;

use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, fields, movement};

/// Whether movements in a category bring money in or take it out.
///
/// Stored as text; the table's CHECK constraint admits only these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum CategoryKind {
    #[sea_orm(string_value = "INCOME")]
    #[serde(rename = "INCOME")]
    Income,
    #[sea_orm(string_value = "EXPENSE")]
    #[serde(rename = "EXPENSE")]
    Expense,
}

impl CategoryKind {
    pub const ALL: [CategoryKind; 2] = [CategoryKind::Income, CategoryKind::Expense];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKind::Income => "INCOME",
            CategoryKind::Expense => "EXPENSE",
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INCOME" => Ok(CategoryKind::Income),
            "EXPENSE" => Ok(CategoryKind::Expense),
            other => Err(ModelError::Validation(format!("unknown category kind: {other}"))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "financial_category")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub description: String,
    pub kind: CategoryKind,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Movement,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Movement => Entity::has_many(movement::Entity).into() }
    }
}

impl Related<movement::Entity> for Entity {
    fn to() -> RelationDef { Relation::Movement.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn new_active(description: &str, kind: CategoryKind) -> Result<ActiveModel, ModelError> {
    Ok(ActiveModel {
        description: Set(fields::required_text("description", description)?),
        kind: Set(kind),
        ..Default::default()
    })
}
