pub fn normalize_text(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn join_corpus(books: &[String]) -> String {
    books.join("\n\n")
}

/// Projects the cleaned texts out of per-book outcomes, preserving input
/// order. Failed books are dropped; their ids have already been reported.
pub fn collect_texts<E>(outcomes: Vec<(u32, Result<String, E>)>) -> Vec<String> {
    outcomes
        .into_iter()
        .filter_map(|(_, outcome)| outcome.ok())
        .collect()
}

pub fn parse_book_id(s: &str) -> Result<u32, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err("book id cannot be empty".to_string());
    }

    match trimmed.parse::<u32>() {
        Ok(0) => Err("book id must be a positive integer".to_string()),
        Ok(id) => Ok(id),
        Err(_) => Err(format!(
            "invalid book id '{}', expected a positive integer",
            trimmed
        )),
    }
}
