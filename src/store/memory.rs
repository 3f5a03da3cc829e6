use crate::error::{CatalogError, CatalogResult, Resource};
use crate::model::{AttributeGroupMeta, RawProduct};
use crate::seed;
use crate::store::traits::CatalogSource;

/// In-memory catalog source. Serves fixed payloads, or fails a resource
/// with a given upstream status to simulate an outage.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogSource {
    products: Vec<RawProduct>,
    attribute_meta: Vec<AttributeGroupMeta>,
    products_failure: Option<u16>,
    attributes_failure: Option<u16>,
}

impl StaticCatalogSource {
    pub fn new(products: Vec<RawProduct>, attribute_meta: Vec<AttributeGroupMeta>) -> Self {
        Self {
            products,
            attribute_meta,
            ..Default::default()
        }
    }

    /// Source serving the bundled sample catalog
    pub fn seeded() -> Self {
        Self::new(seed::products(), seed::attribute_meta())
    }

    pub fn with_products_failure(mut self, status: u16) -> Self {
        self.products_failure = Some(status);
        self
    }

    pub fn with_attributes_failure(mut self, status: u16) -> Self {
        self.attributes_failure = Some(status);
        self
    }

    fn check(resource: Resource, failure: Option<u16>) -> CatalogResult<()> {
        match failure {
            Some(status) => Err(CatalogError::unavailable(
                resource,
                format!("upstream returned status {}", status),
            )),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl CatalogSource for StaticCatalogSource {
    async fn fetch_products(&self) -> CatalogResult<Vec<RawProduct>> {
        Self::check(Resource::Products, self.products_failure)?;
        Ok(self.products.clone())
    }

    async fn fetch_attribute_meta(&self) -> CatalogResult<Vec<AttributeGroupMeta>> {
        Self::check(Resource::AttributeMeta, self.attributes_failure)?;
        Ok(self.attribute_meta.clone())
    }
}
