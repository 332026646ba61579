//! Typed list filters.
//!
//! A [`FilterSpec`] is an ordered list of clauses over real columns. It is
//! compiled into a sea-query [`Condition`] where every user value is a bound
//! parameter; nothing from the request is ever spliced into SQL text.
use sea_orm::sea_query::{BinOper, ColumnRef, Condition, Expr, Func, IntoIden, SimpleExpr};

/// Escape character for LIKE patterns. Needs no quoting on any backend.
const LIKE_ESCAPE: char = '!';
use sea_orm::{ColumnTrait, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// Case-insensitive substring match.
    Contains,
    Equals,
}

#[derive(Debug, Clone)]
pub struct FilterClause {
    pub field: ColumnRef,
    pub comparison: Comparison,
    pub value: Value,
}

impl FilterClause {
    fn into_expr(self) -> SimpleExpr {
        match self.comparison {
            // LOWER on both sides, by the database
            Comparison::Contains => {
                let pattern = SimpleExpr::Binary(
                    Box::new(Func::lower(self.value).into()),
                    BinOper::Escape,
                    Box::new(SimpleExpr::Constant(LIKE_ESCAPE.into())),
                );
                Expr::expr(Func::lower(Expr::col(self.field))).binary(BinOper::Like, pattern)
            }
            Comparison::Equals => Expr::col(self.field).eq(self.value),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FilterSpec {
    clauses: Vec<FilterClause>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `LOWER(col) LIKE LOWER('%value%') ESCAPE '!'` unless the value is
    /// absent or blank. `%` and `_` in the value match literally.
    pub fn contains<C: ColumnTrait>(mut self, column: C, value: Option<&str>) -> Self {
        if let Some(needle) = value.map(str::trim).filter(|v| !v.is_empty()) {
            self.clauses.push(FilterClause {
                field: column_ref(column),
                comparison: Comparison::Contains,
                value: Value::from(format!("%{}%", escape_like(needle))),
            });
        }
        self
    }

    pub fn equals<C, V>(mut self, column: C, value: Option<V>) -> Self
    where
        C: ColumnTrait,
        V: Into<Value>,
    {
        if let Some(value) = value {
            self.clauses.push(FilterClause {
                field: column_ref(column),
                comparison: Comparison::Equals,
                value: value.into(),
            });
        }
        self
    }

    pub fn clauses(&self) -> &[FilterClause] {
        &self.clauses
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// All clauses ANDed together.
    pub fn into_condition(self) -> Condition {
        self.clauses
            .into_iter()
            .fold(Condition::all(), |cond, clause| cond.add(clause.into_expr()))
    }
}

fn escape_like(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '%' | '_') || c == LIKE_ESCAPE {
            out.push(LIKE_ESCAPE);
        }
        out.push(c);
    }
    out
}

fn column_ref<C: ColumnTrait>(column: C) -> ColumnRef {
    ColumnRef::TableColumn(column.entity_name(), column.into_iden())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use models::{asset, contribution};
    use sea_orm::{DbBackend, EntityTrait, QueryFilter, QueryTrait};

    fn render(spec: FilterSpec) -> (String, Vec<Value>) {
        let stmt = asset::Entity::find().filter(spec.into_condition()).build(DbBackend::Postgres);
        (stmt.sql, stmt.values.map(|v| v.0).unwrap_or_default())
    }

    #[test]
    fn blank_values_add_no_clause() {
        let spec = FilterSpec::new()
            .contains(asset::Column::Ticker, Some("   "))
            .contains(asset::Column::Name, None)
            .equals(asset::Column::TypeId, None::<i32>);
        assert!(spec.is_empty());
    }

    #[test]
    fn contains_is_lowered_and_bound() {
        let (sql, values) = render(FilterSpec::new().contains(asset::Column::Ticker, Some(" PeTr ")));
        assert!(sql.contains(r#"LOWER("asset"."ticker") LIKE LOWER($1) ESCAPE"#), "{sql}");
        assert_eq!(values, vec![Value::from("%PeTr%")]);
    }

    #[test]
    fn clauses_are_anded_in_order() {
        let spec = FilterSpec::new()
            .contains(asset::Column::Ticker, Some("pe"))
            .equals(asset::Column::TypeId, Some(3));
        assert_eq!(spec.clauses().len(), 2);
        assert_eq!(spec.clauses()[0].comparison, Comparison::Contains);
        assert_eq!(spec.clauses()[1].comparison, Comparison::Equals);

        let (sql, values) = render(spec);
        assert!(sql.contains(r#"LOWER("asset"."ticker") LIKE LOWER($1) ESCAPE"#), "{sql}");
        assert!(sql.contains(r#"AND "asset"."type_id" = $2"#), "{sql}");
        assert_eq!(values, vec![Value::from("%pe%"), Value::from(3)]);
    }

    #[test]
    fn hostile_text_stays_a_parameter() {
        let (sql, values) = render(FilterSpec::new().contains(asset::Column::Name, Some("x'; DROP TABLE asset; --")));
        assert!(!sql.contains("DROP"));
        assert_eq!(values, vec![Value::from("%x'; DROP TABLE asset; --%")]);
    }

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like("50%_off!"), "50!%!_off!!");
        let (sql, values) = render(FilterSpec::new().contains(asset::Column::Name, Some("%")));
        assert!(sql.contains("ESCAPE '!'"), "{sql}");
        assert_eq!(values, vec![Value::from("%!%%")]);
    }

    #[test]
    fn equals_binds_dates() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date");
        let stmt = contribution::Entity::find()
            .filter(FilterSpec::new().equals(contribution::Column::ContributionDate, Some(day)).into_condition())
            .build(DbBackend::Postgres);
        assert!(stmt.sql.contains(r#""contribution"."contribution_date" = $1"#), "{}", stmt.sql);
        assert_eq!(stmt.values.map(|v| v.0), Some(vec![Value::from(day)]));
    }
}
