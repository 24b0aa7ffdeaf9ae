use crate::{Res, gutenberg, info, management::CatalogManager, success, warning};

/// Bootstraps the local catalog cache.
///
/// Idempotent: if the cache file already exists the call is a logged no-op
/// unless `force` is set. Any failure during creation is caught and logged;
/// corpus builds with explicit ids do not depend on the catalog, so a failed
/// bootstrap never aborts the process.
pub async fn init_cache(force: bool) {
    if CatalogManager::cache_exists() && !force {
        info!("Catalog cache already exists. Skipping initialization.");
        return;
    }

    info!("Initializing catalog cache. This may take a while...");
    match create_cache().await {
        Ok(count) => success!("Catalog cache created with {} entries.", count),
        Err(e) => {
            warning!("Error initializing catalog cache: {}", e);
            warning!("Please ensure you have adequate disk space and a stable internet connection.");
        }
    }
}

async fn create_cache() -> Res<usize> {
    let entries = gutenberg::catalog::fetch_catalog().await?;
    let manager = CatalogManager::new(Some(entries));
    manager
        .save_to_cache()
        .await
        .map_err(|e| format!("{:?}", e))?;
    Ok(manager.count())
}
