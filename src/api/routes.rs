use axum::{routing::get, Router};

use crate::api::handlers::{self, AppState};
use crate::store::traits::CatalogSource;

pub fn create_router<S: CatalogSource + 'static>() -> Router<AppState<S>> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        .route("/", get(handlers::redirect_to_products))
        // Product listing
        .route("/product", get(handlers::list_products::<S>))
}
