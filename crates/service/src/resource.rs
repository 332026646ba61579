//! Generic filtered CRUD.
//!
//! Each ledger entity is described once by a [`Resource`] implementation:
//! its columns, how a form becomes an active model, how a filter becomes a
//! [`FilterSpec`], and the SELECT (with parent joins) used for listing. The
//! operations below are written once against that description.
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, PrimaryKeyTrait, QueryFilter,
    QueryOrder, Select,
};
use serde::de::DeserializeOwned;
use tracing::info;

use crate::errors::ServiceError;
use crate::filter::FilterSpec;
use crate::lookups::{self, Lookup, Lookups};
use models::errors::ModelError;

pub trait Resource: Send + Sync + 'static {
    type Entity: EntityTrait<Column = Self::Column, PrimaryKey = Self::PrimaryKey>;
    type Column: ColumnTrait;
    type PrimaryKey: PrimaryKeyTrait<ValueType = i32>;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity> + Send;
    /// Submitted create/edit form.
    type Input: DeserializeOwned + Send;
    /// Query-string filter; every field optional.
    type Filter: DeserializeOwned + Default + Clone + Send + Sync;
    /// One display row of the list, parent labels included.
    type Row: FromQueryResult + Send + Sync;

    /// Used in logs and error messages.
    const NAME: &'static str;
    /// Dropdown collections the list view needs.
    const LOOKUPS: &'static [Lookup] = &[];

    fn id_column() -> Self::Column;

    fn active_model(input: Self::Input) -> Result<Self::ActiveModel, ModelError>;

    fn filter_spec(filter: &Self::Filter) -> FilterSpec;

    fn list_select() -> Select<Self::Entity> {
        Self::Entity::find()
    }
}

/// Everything a list page shows.
pub struct ListView<R: Resource> {
    pub rows: Vec<R::Row>,
    pub lookups: Lookups,
    pub filter: R::Filter,
}

/// Insert one row and return its id.
pub async fn create<R: Resource>(db: &DatabaseConnection, input: R::Input) -> Result<i32, ServiceError> {
    let am = R::active_model(input)?;
    let res = R::Entity::insert(am).exec(db).await?;
    info!(resource = R::NAME, id = res.last_insert_id, "created");
    Ok(res.last_insert_id)
}

/// Replace every editable column of row `id`. A missing id is a no-op.
pub async fn update<R: Resource>(db: &DatabaseConnection, id: i32, input: R::Input) -> Result<u64, ServiceError> {
    let am = R::active_model(input)?;
    let res = R::Entity::update_many()
        .set(am)
        .filter(R::id_column().eq(id))
        .exec(db)
        .await?;
    info!(resource = R::NAME, id, rows = res.rows_affected, "updated");
    Ok(res.rows_affected)
}

/// Delete row `id`; fails with the database error when other rows still
/// reference it.
pub async fn delete<R: Resource>(db: &DatabaseConnection, id: i32) -> Result<u64, ServiceError> {
    let res = R::Entity::delete_many()
        .filter(R::id_column().eq(id))
        .exec(db)
        .await?;
    info!(resource = R::NAME, id, rows = res.rows_affected, "deleted");
    Ok(res.rows_affected)
}

/// Matching rows, most recent first.
pub async fn list<R: Resource>(db: &DatabaseConnection, filter: &R::Filter) -> Result<Vec<R::Row>, ServiceError> {
    let spec = R::filter_spec(filter);
    let mut select = R::list_select();
    if !spec.is_empty() {
        select = select.filter(spec.into_condition());
    }
    let rows = select
        .order_by_desc(R::id_column())
        .into_model::<R::Row>()
        .all(db)
        .await?;
    Ok(rows)
}

pub async fn list_view<R: Resource>(db: &DatabaseConnection, filter: R::Filter) -> Result<ListView<R>, ServiceError> {
    let rows = list::<R>(db, &filter).await?;
    let lookups = lookups::load(db, R::LOOKUPS).await?;
    Ok(ListView { rows, lookups, filter })
}

pub async fn get<R: Resource>(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<<R::Entity as EntityTrait>::Model>, ServiceError> {
    Ok(R::Entity::find_by_id(id).one(db).await?)
}

pub async fn get_row<R: Resource>(db: &DatabaseConnection, id: i32) -> Result<R::Row, ServiceError> {
    R::list_select()
        .filter(R::id_column().eq(id))
        .into_model::<R::Row>()
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found(R::NAME))
}
