use crate::error::CatalogResult;
use crate::model::{AttributeGroupMeta, RawProduct};
use crate::store::traits::CatalogSource;

/// Both upstream payloads of one request
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub products: Vec<RawProduct>,
    pub attribute_meta: Vec<AttributeGroupMeta>,
}

/// Fetch products and attribute metadata concurrently. Returns the first
/// failure; the other fetch is abandoned.
pub async fn fetch_catalog<S: CatalogSource + ?Sized>(source: &S) -> CatalogResult<CatalogSnapshot> {
    let (products, attribute_meta) =
        tokio::try_join!(source.fetch_products(), source.fetch_attribute_meta())?;

    Ok(CatalogSnapshot {
        products,
        attribute_meta,
    })
}
