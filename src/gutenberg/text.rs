use std::string::FromUtf8Error;

use reqwest::{Client, StatusCode};

use crate::config;

/// Marker lines that end the legal header of an archive text. Any line
/// starting with one of these within the first 600 content lines discards
/// everything accumulated so far.
const TEXT_START_MARKERS: &[&str] = &[
    "*** START OF THE PROJECT GUTENBERG",
    "*** START OF THIS PROJECT GUTENBERG",
    "***START OF THE PROJECT GUTENBERG",
    "***START OF THIS PROJECT GUTENBERG",
    "*** START OF THE COPYRIGHTED",
    "*END*THE SMALL PRINT",
    "*END THE SMALL PRINT",
    "*** SMALL PRINT!",
    "*SMALL PRINT!",
    "This etext was prepared by",
    "This Etext was prepared by",
    "This eBook was prepared by",
    "E-text prepared by",
    "Produced by",
    "Distributed Proofreading Team",
    "Project Gutenberg Online Distributed",
    "Gutenberg Online Distributed",
    "Gutenberg Distributed Proofreaders",
    "tells you about restrictions in how the file may be used.",
    "More information about this book is at the top of this file.",
];

/// Marker lines that begin the legal footer. Only honored after the first
/// 100 content lines so that a short preamble mentioning the project name
/// cannot truncate the whole text.
const TEXT_END_MARKERS: &[&str] = &[
    "*** END OF THE PROJECT GUTENBERG",
    "*** END OF THIS PROJECT GUTENBERG",
    "***END OF THE PROJECT GUTENBERG",
    "***END OF THIS PROJECT GUTENBERG",
    "*** END OF THE COPYRIGHTED",
    "End of the Project Gutenberg",
    "End of The Project Gutenberg",
    "End of Project Gutenberg",
    "End of this Project Gutenberg",
    "END OF PROJECT GUTENBERG",
    "Ende dieses Project Gutenberg",
    "Ende dieses Projekt Gutenberg",
];

/// Inline legalese sections, delimited per archive convention.
const LEGALESE_START_MARKERS: &[&str] = &["<<THIS ELECTRONIC VERSION OF"];
const LEGALESE_END_MARKERS: &[&str] = &[">>"];

#[derive(Debug)]
pub enum FetchError {
    Http(reqwest::Error),
    NotFound(u32),
    Decode(FromUtf8Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Http(err)
    }
}

impl From<FromUtf8Error> for FetchError {
    fn from(err: FromUtf8Error) -> Self {
        FetchError::Decode(err)
    }
}

/// Downloads the raw plain-text payload for one book id from the archive
/// mirror.
///
/// The archive stores plain-text files under several historical URL layouts
/// (`files/{id}/{id}-0.txt`, `files/{id}/{id}.txt`,
/// `cache/epub/{id}/pg{id}.txt`). Each candidate is requested in order; a
/// 404 falls through to the next layout, any other HTTP error is returned
/// immediately, and exhausting all layouts yields [`FetchError::NotFound`].
///
/// # Arguments
///
/// * `id` - Catalog id of the book to download
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<u8>)` - The raw, undecoded response body
/// - `Err(FetchError)` - Network error or no text found under any layout
///
/// # Example
///
/// ```
/// let raw = get_text_by_id(2701).await?; // Moby Dick
/// println!("Downloaded {} bytes", raw.len());
/// ```
pub async fn get_text_by_id(id: u32) -> Result<Vec<u8>, FetchError> {
    let client = Client::new();

    for url in candidate_urls(id) {
        let response = client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            continue;
        }

        let response = response.error_for_status()?;
        return Ok(response.bytes().await?.to_vec());
    }

    Err(FetchError::NotFound(id))
}

/// Decodes a raw download as UTF-8 and strips the archive boilerplate.
///
/// This is the per-book cleaning step of a corpus build: decode, then
/// [`strip_headers`]. Invalid UTF-8 surfaces as [`FetchError::Decode`] so the
/// caller can skip the book under the same policy as a failed download.
pub fn clean_text(raw: Vec<u8>) -> Result<String, FetchError> {
    let text = String::from_utf8(raw)?;
    Ok(strip_headers(&text))
}

/// Strips the legal header and footer boilerplate from an archive text.
///
/// Line-scanning pass over the text:
/// - a start marker within the first 600 emitted lines resets the output
///   accumulated so far (everything before it was header);
/// - an end marker after the first 100 emitted lines terminates the scan
///   (everything after it is footer);
/// - legalese sections delimited by `<<THIS ELECTRONIC VERSION OF` / `>>`
///   are suppressed wherever they appear.
///
/// Texts without any markers pass through unchanged.
pub fn strip_headers(text: &str) -> String {
    let mut out: Vec<&str> = Vec::new();
    let mut emitted = 0usize;
    let mut ignore_section = false;

    for line in text.lines() {
        if emitted <= 600
            && TEXT_START_MARKERS
                .iter()
                .any(|marker| line.starts_with(marker))
        {
            // End of the header: delete the output produced so far.
            out.clear();
            continue;
        }

        if emitted >= 100
            && TEXT_END_MARKERS
                .iter()
                .any(|marker| line.starts_with(marker))
        {
            break;
        }

        if LEGALESE_START_MARKERS
            .iter()
            .any(|marker| line.starts_with(marker))
        {
            ignore_section = true;
            continue;
        } else if LEGALESE_END_MARKERS
            .iter()
            .any(|marker| line.starts_with(marker))
        {
            ignore_section = false;
            continue;
        }

        if !ignore_section {
            out.push(line);
            emitted += 1;
        }
    }

    out.join("\n")
}

fn candidate_urls(id: u32) -> Vec<String> {
    let mirror = config::mirror_url();
    vec![
        format!("{mirror}/files/{id}/{id}-0.txt"),
        format!("{mirror}/files/{id}/{id}.txt"),
        format!("{mirror}/cache/epub/{id}/pg{id}.txt"),
    ]
}
