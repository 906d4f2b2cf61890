//! Catalog browsing command.

use adstore_store::catalog::{Category, CategoryFilter};

use super::Context;

/// Print the catalog entries matching a category and search text.
pub fn browse(category: &str, search: &str) -> Result<(), Box<dyn std::error::Error>> {
    let filter = CategoryFilter::parse(category)
        .ok_or_else(|| format!("unknown category: {category} (try all, contextual, social, display, video)"))?;

    let ctx = Context::load()?;
    let services = ctx.catalog.filter(filter, search);

    if services.is_empty() {
        println!("Ничего не найдено.");
        return Ok(());
    }

    for service in services {
        let badge = service
            .popularity
            .as_deref()
            .map(|p| format!(" [{p}]"))
            .unwrap_or_default();
        println!("#{} {}{}", service.id, service.title, badge);
        println!("    {}", service.description);
        println!("    {} · {}", service.price, Category::name(service.category));
        println!("    {}", service.features.join(" / "));
    }
    Ok(())
}
