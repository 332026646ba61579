use sea_orm::DatabaseConnection;

use crate::db::{self, DatabaseConfig};



/// Fresh, migrated in-memory database for one test
pub async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    db::init(&DatabaseConfig::in_memory()).await
}
