pub mod api;
pub mod config;
pub mod error;
pub mod logic;
pub mod model;
pub mod seed;
pub mod store;

use std::sync::Arc;

// Export API types
pub use api::handlers;
pub use api::routes;

// Export logic entry points
pub use logic::{
    build_index, fetch_catalog, flatten_attributes, paginate, resolve_name, resolve_products,
    CatalogSnapshot, Page,
};

// Export all model types
pub use model::*;

pub use error::{CatalogError, CatalogResult, Resource, ResolveError};

// Export store types
pub use store::{CatalogSource, HttpCatalogSource, StaticCatalogSource};

/// Build the application router for the given configuration
pub fn build_app(config: &crate::config::AppConfig) -> anyhow::Result<axum::Router> {
    let source: Arc<dyn CatalogSource> = if config.upstream.use_seed_data {
        log::info!("Serving the bundled sample catalog");
        Arc::new(StaticCatalogSource::seeded())
    } else {
        log::info!(
            "Upstream catalog: products={} attributes={}",
            config.upstream.products_url,
            config.upstream.attributes_url
        );
        Arc::new(HttpCatalogSource::from_config(&config.upstream)?)
    };

    let service = handlers::ListingService::new(source)
        .with_default_page_size(config.listing.default_page_size);

    Ok(routes::create_router().with_state(Arc::new(service)))
}

/// Bind the configured address and serve the listing until shutdown
pub async fn run_server(config: &crate::config::AppConfig) -> anyhow::Result<()> {
    use axum::serve;
    use tokio::net::TcpListener;

    let app = build_app(config)?;

    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;
    log::info!("Catalog listing running on http://{}/product", bind_address);

    serve(listener, app).await?;

    Ok(())
}
