use std::{path::PathBuf, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    error,
    gutenberg::text::{self, FetchError},
    info, success, utils, warning,
};

/// Assembles the training corpus for the given book ids and writes it to
/// `output`.
///
/// Books are processed strictly in input order: fetch raw bytes, decode,
/// strip boilerplate, lowercase, collapse whitespace. A failure on one book
/// is logged with its id and the book is skipped; the remaining books still
/// make it into the corpus. The cleaned texts are joined with a blank line
/// and written as UTF-8, overwriting any previous corpus at that path.
///
/// A failed write is fatal: there is no recovery path once the books are
/// fetched, so the run terminates with an error.
pub async fn build(ids: Vec<u32>, output: PathBuf) {
    // One-time catalog bootstrap; a logged no-op when the cache exists and
    // non-fatal when it cannot be built.
    super::cache::init_cache(false).await;

    info!("Fetching and cleaning {} books...", ids.len());

    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let mut outcomes: Vec<(u32, Result<String, FetchError>)> = Vec::new();
    for id in &ids {
        pb.set_message(format!("Fetching book {id}..."));
        let outcome = fetch_book(*id).await;
        match &outcome {
            Ok(book) => pb.println(format!(
                "  -> Processed book {} ({} characters).",
                id,
                book.chars().count()
            )),
            Err(e) => warning!("Failed to process book {}: {:?}", id, e),
        }
        outcomes.push((*id, outcome));
    }
    pb.finish_and_clear();

    let books = utils::collect_texts(outcomes);
    let failed = ids.len() - books.len();
    if failed > 0 {
        warning!("{} of {} books omitted from the corpus.", failed, ids.len());
    }

    let corpus = utils::join_corpus(&books);

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            if let Err(e) = async_fs::create_dir_all(parent).await {
                error!("Cannot create output directory {}: {}", parent.display(), e);
            }
        }
    }

    if let Err(e) = async_fs::write(&output, corpus.as_bytes()).await {
        error!("Cannot write corpus to {}: {}", output.display(), e);
    }

    success!(
        "Corpus saved to {} ({} characters).",
        output.display(),
        corpus.chars().count()
    );
}

async fn fetch_book(id: u32) -> Result<String, FetchError> {
    let raw = text::get_text_by_id(id).await?;
    let cleaned = text::clean_text(raw)?;
    Ok(utils::normalize_text(&cleaned))
}
