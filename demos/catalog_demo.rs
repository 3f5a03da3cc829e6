// Example running the listing pipeline over the bundled sample catalog

use catalog_listing::logic::list_products;
use catalog_listing::{PageRequest, StaticCatalogSource};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let source = StaticCatalogSource::seeded();

    for page in 1..=2 {
        let listing = list_products(&source, PageRequest::new(page, 4)).await?;
        println!("Page {}/{}", listing.page, listing.total_pages);

        for product in &listing.products {
            println!("  {} ({})", product.name, product.id);
            for attribute in &product.attributes {
                println!("    {}: {}", attribute.name, attribute.value);
            }
        }
    }

    // A broken metadata feed fails the whole listing
    let mut meta = catalog_listing::seed::attribute_meta();
    meta.retain(|group| group.code != "color");
    let broken = StaticCatalogSource::new(catalog_listing::seed::products(), meta);
    match list_products(&broken, PageRequest::default()).await {
        Ok(_) => println!("Unexpected success"),
        Err(e) => println!("Listing failed as expected: {}", e),
    }

    Ok(())
}
