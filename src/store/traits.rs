use crate::error::CatalogResult;
use crate::model::{AttributeGroupMeta, RawProduct};

/// Upstream provider of the two catalogs joined by the listing endpoint.
///
/// Every call returns a fresh snapshot; nothing is cached between calls.
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the full product catalog
    async fn fetch_products(&self) -> CatalogResult<Vec<RawProduct>>;
    /// Fetch the attribute group metadata
    async fn fetch_attribute_meta(&self) -> CatalogResult<Vec<AttributeGroupMeta>>;
}

#[async_trait::async_trait]
impl<T: CatalogSource + ?Sized> CatalogSource for std::sync::Arc<T> {
    async fn fetch_products(&self) -> CatalogResult<Vec<RawProduct>> {
        (**self).fetch_products().await
    }

    async fn fetch_attribute_meta(&self) -> CatalogResult<Vec<AttributeGroupMeta>> {
        (**self).fetch_attribute_meta().await
    }
}
