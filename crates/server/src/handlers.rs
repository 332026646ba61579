//! Request handlers shared by every resource page.
use axum::extract::{Form, Query, State};
use axum::http::Uri;
use axum::response::{Html, Redirect};
use axum::Json;
use serde::Deserialize;

use common::types::Health;
use service::errors::ServiceError;
use service::resource;

use crate::errors::AppError;
use crate::state::AppState;
use crate::views::Page;

/// Edit submissions: the row id plus the same fields as the create form.
#[derive(Debug, Deserialize)]
pub struct EditForm<F> {
    #[serde(deserialize_with = "common::de::from_str")]
    pub id: i32,
    #[serde(flatten)]
    pub fields: F,
}

#[derive(Debug, Deserialize)]
pub struct DeleteForm {
    #[serde(deserialize_with = "common::de::from_str")]
    pub id: i32,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn home() -> Redirect {
    Redirect::to("/tipos")
}

pub async fn list<P: Page>(
    State(state): State<AppState>,
    Query(filter): Query<P::Filter>,
) -> Result<Html<String>, AppError> {
    let view = resource::list_view::<P>(&state.db, filter).await.map_err(|e| state.err(e))?;
    Ok(Html(P::render(&view)))
}

pub async fn create<P: Page>(
    State(state): State<AppState>,
    Form(input): Form<P::Input>,
) -> Result<Redirect, AppError> {
    resource::create::<P>(&state.db, input).await.map_err(|e| state.err(e))?;
    Ok(Redirect::to(P::PATH))
}

pub async fn update<P: Page>(
    State(state): State<AppState>,
    Form(form): Form<EditForm<P::Input>>,
) -> Result<Redirect, AppError> {
    resource::update::<P>(&state.db, form.id, form.fields).await.map_err(|e| state.err(e))?;
    Ok(Redirect::to(P::PATH))
}

pub async fn delete<P: Page>(
    State(state): State<AppState>,
    Form(form): Form<DeleteForm>,
) -> Result<Redirect, AppError> {
    resource::delete::<P>(&state.db, form.id).await.map_err(|e| state.err(e))?;
    Ok(Redirect::to(P::PATH))
}

pub async fn not_found(State(state): State<AppState>, uri: Uri) -> AppError {
    state.err(ServiceError::NotFound(uri.path().to_string()))
}
