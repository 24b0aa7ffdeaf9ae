use gutencorp::utils::*;

#[test]
fn test_normalize_text_collapses_whitespace() {
    // Runs of spaces, tabs and newlines collapse to single spaces
    assert_eq!(normalize_text("Hello\n\nWorld\t\t!"), "hello world !");

    // Leading and trailing whitespace is trimmed away
    assert_eq!(normalize_text("  Call me   Ishmael.  "), "call me ishmael.");

    // Already-normalized text is unchanged
    assert_eq!(normalize_text("already clean"), "already clean");
}

#[test]
fn test_normalize_text_lowercases() {
    assert_eq!(normalize_text("MOBY DICK"), "moby dick");

    // Mixed case with punctuation attached to tokens
    assert_eq!(normalize_text("It was the Whale!"), "it was the whale!");
}

#[test]
fn test_normalize_text_preserves_tokens() {
    let raw = "The\tquick   brown\n\nfox";
    let normalized = normalize_text(raw);

    // Tokenizing by whitespace must yield the same tokens as the original
    let original_tokens: Vec<String> = raw
        .split_whitespace()
        .map(|t| t.to_lowercase())
        .collect();
    let normalized_tokens: Vec<&str> = normalized.split_whitespace().collect();
    assert_eq!(original_tokens, normalized_tokens);
}

#[test]
fn test_normalize_text_empty_input() {
    assert_eq!(normalize_text(""), "");

    // Whitespace-only input normalizes to the empty string
    assert_eq!(normalize_text(" \t\n "), "");
}

#[test]
fn test_normalize_text_deterministic() {
    let raw = "Some\n MIXED   input\t";
    assert_eq!(normalize_text(raw), normalize_text(raw));
}

#[test]
fn test_join_corpus_preserves_order() {
    let books = vec![
        "first book".to_string(),
        "second book".to_string(),
        "third book".to_string(),
    ];

    // Books are joined in input order with a blank-line separator
    assert_eq!(join_corpus(&books), "first book\n\nsecond book\n\nthird book");
}

#[test]
fn test_join_corpus_single_book() {
    // A single book gets no separator at all
    let books = vec!["only one".to_string()];
    assert_eq!(join_corpus(&books), "only one");
}

#[test]
fn test_join_corpus_empty_list() {
    // No books produce an empty corpus
    assert_eq!(join_corpus(&[]), "");
}

#[test]
fn test_collect_texts_all_succeed() {
    let outcomes: Vec<(u32, Result<String, String>)> = vec![
        (11, Ok("alice".to_string())),
        (84, Ok("frankenstein".to_string())),
    ];

    let texts = collect_texts(outcomes);
    assert_eq!(texts, vec!["alice".to_string(), "frankenstein".to_string()]);
}

#[test]
fn test_collect_texts_skips_failures_in_order() {
    let outcomes: Vec<(u32, Result<String, String>)> = vec![
        (11, Ok("alice".to_string())),
        (9999999, Err("not found".to_string())),
        (84, Ok("frankenstein".to_string())),
    ];

    // The failed book is omitted; the survivors keep their input order
    let texts = collect_texts(outcomes);
    assert_eq!(texts.len(), 2);
    assert_eq!(texts, vec!["alice".to_string(), "frankenstein".to_string()]);
}

#[test]
fn test_collect_texts_all_fail() {
    let outcomes: Vec<(u32, Result<String, String>)> = vec![
        (1, Err("network".to_string())),
        (2, Err("decode".to_string())),
    ];

    assert!(collect_texts(outcomes).is_empty());
}

#[test]
fn test_parse_book_id_valid_inputs() {
    assert_eq!(parse_book_id("2701"), Ok(2701));

    // Surrounding whitespace is tolerated
    assert_eq!(parse_book_id(" 84 "), Ok(84));
}

#[test]
fn test_parse_book_id_invalid_inputs() {
    // Empty input
    let result = parse_book_id("");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("cannot be empty"));

    // Whitespace only
    let result = parse_book_id("   ");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("cannot be empty"));

    // Zero is not a valid catalog id
    let result = parse_book_id("0");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("positive integer"));

    // Negative numbers
    let result = parse_book_id("-5");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("invalid book id '-5'"));

    // Garbage
    let result = parse_book_id("moby");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("invalid book id 'moby'"));
}
