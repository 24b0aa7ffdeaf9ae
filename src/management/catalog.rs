use std::{io::Error, path::PathBuf};

use chrono::Utc;

use crate::types::{CatalogCache, CatalogEntry};

#[derive(Debug)]
pub enum CatalogError {
    IoError(Error),
    SerdeError(serde_json::Error),
}

impl From<Error> for CatalogError {
    fn from(err: Error) -> Self {
        CatalogError::IoError(err)
    }
}

pub struct CatalogManager {
    cache: CatalogCache,
}

impl CatalogManager {
    pub fn new(entries: Option<Vec<CatalogEntry>>) -> Self {
        Self {
            cache: CatalogCache {
                created: Utc::now().to_rfc3339(),
                entries: entries.unwrap_or(Vec::new()),
            },
        }
    }

    pub async fn load_from_cache() -> Result<Self, CatalogError> {
        let path = Self::cache_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| CatalogError::IoError(e))?;
        let cache = serde_json::from_str(&content).map_err(|e| CatalogError::SerdeError(e))?;
        Ok(Self { cache })
    }

    pub async fn save_to_cache(&self) -> Result<(), CatalogError> {
        let path = Self::cache_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| CatalogError::IoError(e))?;
        }

        let json =
            serde_json::to_string_pretty(&self.cache).map_err(|e| CatalogError::SerdeError(e))?;
        async_fs::write(path, json)
            .await
            .map_err(|e| CatalogError::IoError(e))
    }

    pub fn get(&self, id: u32) -> Option<&CatalogEntry> {
        self.cache.entries.iter().find(|entry| entry.id == id)
    }

    pub fn count(&self) -> usize {
        self.cache.entries.len()
    }

    pub fn created(&self) -> &str {
        &self.cache.created
    }

    /// Existence check only; the cache is never consulted when books are
    /// fetched by explicit id.
    pub fn cache_exists() -> bool {
        Self::cache_path().is_file()
    }

    fn cache_path() -> PathBuf {
        let mut path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(".gutencorp_cache.json");
        path
    }
}
