//! # Gutenberg Archive Module
//!
//! This module provides the integration layer between gutencorp and the
//! Project Gutenberg archive. It handles all HTTP communication with the
//! archive mirror as well as the archive-convention text cleanup that has to
//! happen before a downloaded book is usable as corpus material.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI)
//!          ↓
//! Gutenberg Integration Layer
//!     ├── Book Texts (plain-text downloads, boilerplate stripping)
//!     └── Catalog Feed (CSV metadata feed for the local cache)
//!          ↓
//! HTTP Layer (reqwest)
//!          ↓
//! Project Gutenberg Mirror
//! ```
//!
//! ## Core Modules
//!
//! ### Text Module
//!
//! [`text`] - Downloads raw book texts and strips licensing boilerplate:
//! - **Mirror Layouts**: The archive stores plain-text files under several
//!   historical URL layouts; each candidate layout is probed in order and the
//!   first hit wins.
//! - **Boilerplate Stripping**: Project Gutenberg texts carry legal headers
//!   and footers delimited by well-known marker lines; [`text::strip_headers`]
//!   removes them with a line-scanning pass.
//! - **No Retries**: A failed download is reported to the caller as-is. One
//!   bad book must never abort a corpus build, so all recovery policy lives
//!   in the CLI layer.
//!
//! ### Catalog Module
//!
//! [`catalog`] - Fetches and parses the catalog metadata feed:
//! - **CSV Feed**: The archive publishes its catalog as a CSV feed; the
//!   parser tolerates quoted fields and skips malformed rows.
//! - **One-Time Use**: The feed is only consulted when bootstrapping the
//!   local catalog cache; corpus builds with explicit ids never touch it.
//!
//! ## Error Types
//!
//! - [`text::FetchError`] - per-book failures (HTTP error, unknown id,
//!   invalid UTF-8); callers log and skip.
//! - `reqwest::Error` - catalog feed failures; callers treat the bootstrap
//!   as non-fatal.

pub mod catalog;
pub mod text;
