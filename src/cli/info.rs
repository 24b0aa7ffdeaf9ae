use tabled::Table;

use crate::{
    config, info,
    management::CatalogManager,
    types::BookTableRow,
    warning,
};

/// Displays information about the catalog cache and the default book list.
///
/// # Arguments
///
/// * `catalog` - Display catalog cache status (presence, entry count,
///   creation date)
/// * `books` - Display the default book list as a table, resolved against
///   the catalog cache where possible
///
/// The function executes in priority order and returns after the first
/// match. Missing cache data degrades to placeholders rather than failing:
/// the cache is a convenience, not a requirement.
pub async fn info(catalog: bool, books: bool) {
    if catalog {
        if !CatalogManager::cache_exists() {
            warning!("Catalog cache does not exist. Run gutencorp cache init.");
            return;
        }

        match CatalogManager::load_from_cache().await {
            Ok(manager) => {
                info!("Catalog cache entries: {}", manager.count());
                info!("Catalog cache created: {}", manager.created());
            }
            Err(e) => warning!("Failed to load catalog cache. Err: {:?}", e),
        }
        return;
    }

    if books {
        let manager = CatalogManager::load_from_cache().await.ok();

        let rows: Vec<BookTableRow> = config::default_book_ids()
            .into_iter()
            .map(|id| match manager.as_ref().and_then(|m| m.get(id)) {
                Some(entry) => BookTableRow {
                    id,
                    title: entry.title.clone(),
                    authors: entry.authors.clone(),
                    language: entry.language.clone(),
                },
                None => BookTableRow {
                    id,
                    title: String::from("-"),
                    authors: String::from("-"),
                    language: String::from("-"),
                },
            })
            .collect();

        let table = Table::new(rows);
        println!("{}", table);
    }
}
