use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use service::errors::ServiceError;
use models::errors::ModelError;
use tracing::error;

use crate::views::{escape_html, layout};

/// A failed request, rendered as an HTML error page.
#[derive(Debug)]
pub struct AppError {
    inner: ServiceError,
    expose: bool,
}

impl AppError {
    pub fn new(inner: ServiceError, expose: bool) -> Self {
        Self { inner, expose }
    }

    pub fn status(&self) -> StatusCode {
        match &self.inner {
            ServiceError::Model(ModelError::Validation(_)) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        error!(status = status.as_u16(), error = %self.inner, "request failed");
        let detail = if self.expose { Some(escape_html(&self.inner.to_string())) } else { None };
        (status, Html(layout::error_page(status, detail.as_deref()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        let v = AppError::new(ServiceError::Model(ModelError::Validation("ticker required".into())), false);
        assert_eq!(v.status(), StatusCode::BAD_REQUEST);
        let nf = AppError::new(ServiceError::not_found("asset"), false);
        assert_eq!(nf.status(), StatusCode::NOT_FOUND);
        let db = AppError::new(ServiceError::Db(sea_orm::DbErr::Custom("FOREIGN KEY constraint failed".into())), false);
        assert_eq!(db.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
