use reqwest::Client;

use crate::{config, types::CatalogEntry};

/// Downloads and parses the catalog metadata feed.
///
/// Fetches the CSV feed configured via [`config::catalog_url`] and parses it
/// into catalog entries. The feed is large (one row per catalog entry); this
/// is only run when bootstrapping the local cache.
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<CatalogEntry>)` - All text entries of the feed
/// - `Err(reqwest::Error)` - Network error, HTTP error
pub async fn fetch_catalog() -> Result<Vec<CatalogEntry>, reqwest::Error> {
    let client = Client::new();
    let response = client
        .get(&config::catalog_url())
        .send()
        .await?
        .error_for_status()?;
    let body = response.text().await?;

    Ok(parse_catalog(&body))
}

/// Parses the catalog CSV feed into entries.
///
/// Feed columns: `Text#,Type,Issued,Title,Language,Authors,...`. The header
/// row, rows of non-text media and rows without a numeric id are skipped.
pub fn parse_catalog(csv: &str) -> Vec<CatalogEntry> {
    let mut entries = Vec::new();

    for row in parse_rows(csv) {
        if row.len() < 6 {
            continue;
        }

        // Header row falls out here along with any garbage ids.
        let id = match row[0].trim().parse::<u32>() {
            Ok(id) => id,
            Err(_) => continue,
        };

        if row[1] != "Text" {
            continue;
        }

        entries.push(CatalogEntry {
            id,
            title: row[3].clone(),
            language: row[4].clone(),
            authors: row[5].clone(),
        });
    }

    entries
}

/// Minimal CSV parser (quotes + CRLF tolerant).
fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = String::new();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            ',' if !in_quotes => {
                row.push(std::mem::take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) {
                    chars.next();
                }
                row.push(std::mem::take(&mut field));
                if !row.is_empty() && !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(std::mem::take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Flush any trailing field/row even if quotes were unterminated.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}
