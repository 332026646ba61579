use sea_orm::DatabaseConnection;
use service::errors::ServiceError;

use crate::errors::AppError;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Show underlying error text on error pages.
    pub debug: bool,
}

impl AppState {
    pub fn err(&self, e: impl Into<ServiceError>) -> AppError {
        AppError::new(e.into(), self.debug)
    }
}
