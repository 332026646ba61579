use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use service::resources::{AssetTypes, Assets, Categories, Contributions, Dividends, Movements};

use crate::handlers;
use crate::state::AppState;
use crate::views::Page;

/// List/create on the page path, plus `/edit` and `/delete`.
pub fn resource_routes<P: Page>() -> Router<AppState> {
    Router::new()
        .route(P::PATH, get(handlers::list::<P>).post(handlers::create::<P>))
        .route(&format!("{}/edit", P::PATH), post(handlers::update::<P>))
        .route(&format!("{}/delete", P::PATH), post(handlers::delete::<P>))
}

/// Build the full application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/health", get(handlers::health))
        .merge(resource_routes::<AssetTypes>())
        .merge(resource_routes::<Assets>())
        .merge(resource_routes::<Contributions>())
        .merge(resource_routes::<Dividends>())
        .merge(resource_routes::<Categories>())
        .merge(resource_routes::<Movements>())
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(
            ServiceBuilder::new().layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                    .on_request(DefaultOnRequest::new().level(Level::INFO))
                    .on_response(DefaultOnResponse::new().level(Level::INFO))
                    .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
            ),
        )
}
