use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: u32,
    pub title: String,
    pub authors: String,
    pub language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogCache {
    pub created: String,
    pub entries: Vec<CatalogEntry>,
}

#[derive(Tabled)]
pub struct BookTableRow {
    pub id: u32,
    pub title: String,
    pub authors: String,
    pub language: String,
}
