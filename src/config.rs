//! Configuration management for the Gutenberg corpus builder.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a centralized way to
//! manage application configuration including the archive mirror URL, the
//! catalog feed URL, and the built-in defaults for corpus assembly.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `gutencorp/.env`. Every setting has a built-in
/// default, so a missing `.env` file is not an error.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/gutencorp/.env`
/// - macOS: `~/Library/Application Support/gutencorp/.env`
/// - Windows: `%LOCALAPPDATA%/gutencorp/.env`
///
/// # Returns
///
/// Returns `Ok(())` if the environment file is successfully loaded or absent,
/// or an error string if directory creation or file parsing fails.
///
/// # Example
///
/// ```
/// use gutencorp::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("gutencorp/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the base URL of the Project Gutenberg mirror.
///
/// Retrieves the `GUTENCORP_MIRROR_URL` environment variable which specifies
/// the archive host that book texts are fetched from. Defaults to the main
/// `gutenberg.org` site when unset.
///
/// # Example
///
/// ```
/// let mirror = mirror_url(); // e.g., "https://www.gutenberg.org"
/// ```
pub fn mirror_url() -> String {
    env::var("GUTENCORP_MIRROR_URL").unwrap_or_else(|_| "https://www.gutenberg.org".to_string())
}

/// Returns the URL of the catalog metadata feed.
///
/// Retrieves the `GUTENCORP_CATALOG_URL` environment variable which specifies
/// the CSV feed the local catalog cache is built from. Defaults to the
/// `pg_catalog.csv` feed on the main site when unset.
///
/// # Example
///
/// ```
/// let feed = catalog_url(); // e.g., ".../cache/epub/feeds/pg_catalog.csv"
/// ```
pub fn catalog_url() -> String {
    env::var("GUTENCORP_CATALOG_URL")
        .unwrap_or_else(|_| "https://www.gutenberg.org/cache/epub/feeds/pg_catalog.csv".to_string())
}

/// Returns the default book ids used when `build` is invoked without `--id`.
///
/// A handful of well-known large English books: 2701 Moby Dick, 84
/// Frankenstein, 1342 Pride and Prejudice, 11 Alice in Wonderland, 100 The
/// Complete Works of Shakespeare.
pub fn default_book_ids() -> Vec<u32> {
    vec![2701, 84, 1342, 11, 100]
}

/// Returns the default output path for the assembled corpus, relative to the
/// working directory.
pub fn default_corpus_path() -> PathBuf {
    PathBuf::from("data").join("gutenberg_full_corpus.txt")
}
