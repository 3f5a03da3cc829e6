use axum::http::{header, StatusCode};
use axum::routing::get;
use axum::Router;
use catalog_listing::logic::list_products;
use catalog_listing::{CatalogError, CatalogSource, HttpCatalogSource, PageRequest, Resource};
use tokio::net::TcpListener;

const PRODUCTS: &str = r#"[{"id": 6267654,"name": "Auto Omega","attributes": {"cat": "cat_2","color": "black,white"}},{"id": 8094994,"name": "Bike Alef","attributes": {"color": "black,white","cat": "cat_1"}},{"id": 2846132,"name": "Bike Bet","attributes": {"color": "blue","cat": "cat_1_1,cat_1_2"}},{"id": 12345,"name": "Random product","attributes": []}]"#;

const ATTRIBUTE_META: &str = r#"[{"name": "Color","code": "color","values": [{"name": "Black","code": "black"},{"name": "White","code": "white"},{"name": "Blue","code": "blue"}]},{"name": "Category","code": "cat","values": [{"name": "Electric bikes","code": "cat_1_1"},{"name": "Bikes","code": "cat_1"},{"name": "BMX","code": "cat_1_2"},{"name": "Cars","code": "cat_2"}]}]"#;

/// Serve the two catalog documents from a local stub upstream
async fn spawn_upstream(
    products: (StatusCode, &'static str),
    attributes: (StatusCode, &'static str),
) -> HttpCatalogSource {
    let app = Router::new()
        .route(
            "/backend/products.json",
            get(move || async move {
                (products.0, [(header::CONTENT_TYPE, "application/json")], products.1)
            }),
        )
        .route(
            "/backend/attribute_meta.json",
            get(move || async move {
                (attributes.0, [(header::CONTENT_TYPE, "application/json")], attributes.1)
            }),
        );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    HttpCatalogSource::new(
        reqwest::Client::new(),
        format!("http://{}/backend/products.json", address),
        format!("http://{}/backend/attribute_meta.json", address),
    )
}

#[tokio::test]
async fn test_fetches_and_decodes_both_catalogs() {
    let source = spawn_upstream((StatusCode::OK, PRODUCTS), (StatusCode::OK, ATTRIBUTE_META)).await;

    let products = source.fetch_products().await.unwrap();
    assert_eq!(products.len(), 4);
    let keys: Vec<&str> = products[0].attributes.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["cat", "color"]);

    let meta = source.fetch_attribute_meta().await.unwrap();
    assert_eq!(meta.len(), 2);
    assert_eq!(meta[1].values.len(), 4);
}

#[tokio::test]
async fn test_listing_over_http_source() {
    let source = spawn_upstream((StatusCode::OK, PRODUCTS), (StatusCode::OK, ATTRIBUTE_META)).await;

    let page = list_products(&source, PageRequest::new(2, 2)).await.unwrap();
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.products[0].name, "Bike Bet");
    assert_eq!(page.products[0].attributes[1].value, "Bikes > Electric bikes");
    assert!(page.products[1].attributes.is_empty());
}

#[tokio::test]
async fn test_server_error_is_unavailable() {
    let source = spawn_upstream(
        (StatusCode::INTERNAL_SERVER_ERROR, ""),
        (StatusCode::OK, ATTRIBUTE_META),
    )
    .await;

    match source.fetch_products().await {
        Err(CatalogError::UpstreamUnavailable { resource, reason }) => {
            assert_eq!(resource, Resource::Products);
            assert!(reason.contains("500"));
        }
        other => panic!("expected unavailable upstream, got {:?}", other),
    }

    let err = list_products(&source, PageRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::UpstreamUnavailable { .. }));
}

#[tokio::test]
async fn test_invalid_json_is_malformed() {
    let source = spawn_upstream((StatusCode::OK, PRODUCTS), (StatusCode::OK, "{not json")).await;

    match source.fetch_attribute_meta().await {
        Err(CatalogError::MalformedUpstream { resource, .. }) => {
            assert_eq!(resource, Resource::AttributeMeta)
        }
        other => panic!("expected malformed payload, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_upstream_is_unavailable() {
    // Bind then drop to get a port nothing listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);

    let source = HttpCatalogSource::new(
        reqwest::Client::new(),
        format!("http://{}/products.json", address),
        format!("http://{}/attribute_meta.json", address),
    );

    let err = source.fetch_products().await.unwrap_err();
    assert!(matches!(err, CatalogError::UpstreamUnavailable { .. }));
}
