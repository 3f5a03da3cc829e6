use crate::error::CatalogResult;
use crate::logic::fetch::fetch_catalog;
use crate::logic::flatten::resolve_products;
use crate::logic::index::build_index;
use crate::logic::paginate::paginate;
use crate::model::{PageRequest, ProductPage};
use crate::store::traits::CatalogSource;

/// Fetch, join and paginate the catalog for one listing request.
///
/// Every product is resolved before slicing, so an inconsistency anywhere
/// in the catalog fails the request even when it lies off the page.
pub async fn list_products<S: CatalogSource + ?Sized>(
    source: &S,
    request: PageRequest,
) -> CatalogResult<ProductPage> {
    let snapshot = fetch_catalog(source).await?;

    let index = build_index(&snapshot.attribute_meta);
    let products = resolve_products(snapshot.products, &index)?;
    let page = paginate(products, request);

    Ok(ProductPage {
        products: page.items,
        page: request.page,
        total_pages: page.total_pages,
    })
}
