use indexmap::IndexMap;

use crate::error::{CatalogError, CatalogResult, ResolveError};
use crate::logic::resolve::resolve_name;
use crate::model::{AttributeIndex, Product, RawProduct, ResolvedAttribute};

pub const VALUE_SEPARATOR: char = ',';

/// Turn a product's raw `group -> "code,code"` map into display pairs.
///
/// Output follows the input group order, and within a group the order of
/// the comma separated codes.
pub fn flatten_attributes(
    raw: &IndexMap<String, String>,
    index: &AttributeIndex,
) -> Result<Vec<ResolvedAttribute>, ResolveError> {
    let mut resolved = Vec::with_capacity(raw.len());

    for (group_code, codes) in raw {
        let group = index
            .group(group_code)
            .ok_or_else(|| ResolveError::UnknownGroup {
                group: group_code.clone(),
            })?;

        for code in codes.split(VALUE_SEPARATOR) {
            let value = resolve_name(code, &group.items)?;
            resolved.push(ResolvedAttribute::new(group.name.clone(), value));
        }
    }

    Ok(resolved)
}

pub fn resolve_product(product: RawProduct, index: &AttributeIndex) -> CatalogResult<Product> {
    match flatten_attributes(&product.attributes, index) {
        Ok(attributes) => Ok(product.into_product(attributes)),
        Err(source) => Err(CatalogError::AttributeResolution {
            product_id: product.id,
            source,
        }),
    }
}

/// Resolve every product, stopping at the first one that cannot be resolved
pub fn resolve_products(
    products: Vec<RawProduct>,
    index: &AttributeIndex,
) -> CatalogResult<Vec<Product>> {
    products
        .into_iter()
        .map(|product| resolve_product(product, index))
        .collect()
}
