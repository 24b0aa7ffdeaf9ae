//! # CLI Module
//!
//! This module provides the command-line interface layer for gutencorp, a
//! tool that assembles a character-level training corpus from Project
//! Gutenberg books. It implements all user-facing CLI commands and
//! coordinates between the archive client, the local catalog cache, and
//! user interaction.
//!
//! ## Commands
//!
//! ### Corpus Operations
//!
//! - [`build`] - Fetches, cleans and normalizes each requested book, joins
//!   the results and writes a single corpus file
//!
//! ### Cache Operations
//!
//! - [`init_cache`] - One-time bootstrap of the local catalog metadata cache
//!   from the remote feed
//!
//! ### Information Commands
//!
//! - [`info`] - Catalog cache status and the default book list
//!
//! ## Error Handling Philosophy
//!
//! - **Graceful Degradation**: one failed book download is logged and
//!   skipped; the rest of the corpus still gets built.
//! - **Non-Fatal Bootstrap**: a failed cache bootstrap is reported with a
//!   recovery suggestion and the process continues, since fixed-id corpus
//!   builds never consult the cache.
//! - **Fatal Writes**: a failed corpus write terminates the run; there is no
//!   recovery path for it.
//!
//! ## Progress and User Experience
//!
//! Long-running operations show an indicatif spinner with per-book status,
//! and every processed or skipped book produces one log line through the
//! crate's status macros.

mod cache;
mod corpus;
mod info;

pub use cache::init_cache;
pub use corpus::build;
pub use info::info;
