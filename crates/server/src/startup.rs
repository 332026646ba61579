use axum::Router;
use configs::AppConfig;
use tokio::net::TcpListener;
use tracing::info;

use crate::routes;
use crate::state::AppState;
use models::db::{self, DatabaseConfig};

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
}

/// Serve `app` on `listener` until `signal` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, signal: F) -> anyhow::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app).with_graceful_shutdown(signal).await?;
    Ok(())
}

/// Open the pool, migrate, serve until Ctrl+C, then close the pool.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let mut db_cfg = DatabaseConfig::from(&cfg.database);
    db_cfg.sqlx_logging |= cfg.server.debug;
    let pool = db::init(&db_cfg).await?;

    let state = AppState { db: pool.clone(), debug: cfg.server.debug };
    let app = routes::build_router(state);

    let addr = cfg.server.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(addr = %listener.local_addr()?, debug = cfg.server.debug, "ledger server listening");

    serve(listener, app, shutdown_signal()).await?;

    db::shutdown(pool).await?;
    Ok(())
}
