use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Redirect, Response},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::api::page_extractor::PageParams;
use crate::error::CatalogError;
use crate::logic::listing;
use crate::model::{PageRequest, ProductPage, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::store::traits::CatalogSource;

/// Everything a listing request needs; shared read-only across requests
#[derive(Debug)]
pub struct ListingService<S> {
    pub source: S,
    pub default_page_size: usize,
}

impl<S: CatalogSource> ListingService<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_default_page_size(mut self, page_size: usize) -> Self {
        self.default_page_size = page_size.max(1);
        self
    }

    /// Apply defaults to the parameters of one request
    pub fn page_request(&self, params: PageParams) -> PageRequest {
        PageRequest::new(
            params.page.unwrap_or(DEFAULT_PAGE),
            params.page_size.unwrap_or(self.default_page_size),
        )
    }
}

pub type AppState<S> = Arc<ListingService<S>>;

/// Simple health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            status: "error".to_string(),
            message: message.to_string(),
            errors: None,
        }
    }
}

impl CatalogError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::UpstreamUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            CatalogError::MalformedUpstream { .. } => StatusCode::BAD_GATEWAY,
            CatalogError::AttributeResolution { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            CatalogError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            CatalogError::UpstreamUnavailable { .. } | CatalogError::MalformedUpstream { .. } => {
                log::warn!("Listing aborted: {}", self)
            }
            CatalogError::AttributeResolution { .. } => log::error!("Listing aborted: {}", self),
            CatalogError::Validation { errors } => {
                log::info!("Rejected listing parameters: {:?}", errors)
            }
        }

        let body = match self {
            CatalogError::UpstreamUnavailable { .. } => {
                ErrorResponse::new("external server returned error")
            }
            CatalogError::MalformedUpstream { .. } => {
                ErrorResponse::new("external server returned invalid data")
            }
            CatalogError::AttributeResolution { .. } => {
                ErrorResponse::new("failed to resolve product attributes")
            }
            CatalogError::Validation { errors } => ErrorResponse {
                errors: Some(errors),
                ..ErrorResponse::new("The given data was invalid.")
            },
        };

        (status, Json(body)).into_response()
    }
}

pub async fn redirect_to_products() -> Redirect {
    Redirect::temporary("/product")
}

/// GET /product?page=&page_size=
///
/// Attribute metadata missing for any product yields a 500, even for a page
/// such as `page=100` that would otherwise be empty.
pub async fn list_products<S: CatalogSource + 'static>(
    State(service): State<AppState<S>>,
    params: PageParams,
) -> Result<Json<ProductPage>, CatalogError> {
    let request = service.page_request(params);

    let page = listing::list_products(&service.source, request).await?;

    log::info!(
        "Listed page {}/{} ({} products, page_size={})",
        page.page,
        page.total_pages,
        page.products.len(),
        request.page_size
    );

    Ok(Json(page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ResolveError, Resource};
    use crate::model::ProductId;
    use crate::store::StaticCatalogSource;

    #[test]
    fn test_page_request_defaults() {
        let service = ListingService::new(StaticCatalogSource::default());
        assert_eq!(service.page_request(PageParams::default()), PageRequest::new(1, 10));

        let service = service.with_default_page_size(4);
        let params = PageParams {
            page: Some(3),
            page_size: None,
        };
        assert_eq!(service.page_request(params), PageRequest::new(3, 4));
    }

    #[test]
    fn test_error_status_codes() {
        let unavailable = CatalogError::unavailable(Resource::Products, "status 500");
        assert_eq!(unavailable.status_code(), StatusCode::SERVICE_UNAVAILABLE);

        let malformed = CatalogError::malformed(Resource::AttributeMeta, "expected value");
        assert_eq!(malformed.status_code(), StatusCode::BAD_GATEWAY);

        let resolution = CatalogError::AttributeResolution {
            product_id: ProductId::Number(1),
            source: ResolveError::UnknownGroup {
                group: "cat".to_string(),
            },
        };
        assert_eq!(resolution.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let validation = CatalogError::Validation {
            errors: BTreeMap::new(),
        };
        assert_eq!(validation.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_error_body_shape() {
        let body = serde_json::to_value(ErrorResponse::new("external server returned error")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"status": "error", "message": "external server returned error"})
        );
    }
}
