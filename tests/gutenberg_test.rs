use gutencorp::gutenberg::catalog::parse_catalog;
use gutencorp::gutenberg::text::strip_headers;

// Helper to build a synthetic archive text with the given number of content
// lines between a legal header and footer.
fn archive_text(content_lines: usize) -> (String, Vec<String>) {
    let content: Vec<String> = (0..content_lines).map(|i| format!("content line {}", i)).collect();

    let mut lines: Vec<String> = vec![
        "The Project Gutenberg eBook of Some Book".to_string(),
        "This eBook is for the use of anyone anywhere in the United States".to_string(),
        "*** START OF THE PROJECT GUTENBERG EBOOK SOME BOOK ***".to_string(),
    ];
    lines.extend(content.clone());
    lines.push("*** END OF THE PROJECT GUTENBERG EBOOK SOME BOOK ***".to_string());
    lines.push("Updated editions will replace the previous one.".to_string());

    (lines.join("\n"), content)
}

#[test]
fn test_strip_headers_removes_header_and_footer() {
    let (text, content) = archive_text(150);
    let stripped = strip_headers(&text);

    // Only the content between the markers survives
    assert_eq!(stripped, content.join("\n"));

    // No marker or license text leaks through
    assert!(!stripped.contains("PROJECT GUTENBERG"));
    assert!(!stripped.contains("Updated editions"));
}

#[test]
fn test_strip_headers_passthrough_without_markers() {
    let text = "call me ishmael\nsome years ago\nnever mind how long precisely";

    // Texts without any markers are returned unchanged
    assert_eq!(strip_headers(text), text);
}

#[test]
fn test_strip_headers_keeps_early_end_marker() {
    // An end marker within the first 100 content lines is body text, not a
    // footer; short preambles must not truncate the whole book.
    let mut lines: Vec<String> = (0..10).map(|i| format!("line {}", i)).collect();
    lines.push("End of the Project Gutenberg mention inside the text".to_string());
    lines.push("the story continues".to_string());
    let text = lines.join("\n");

    let stripped = strip_headers(&text);
    assert!(stripped.contains("End of the Project Gutenberg"));
    assert!(stripped.contains("the story continues"));
}

#[test]
fn test_strip_headers_suppresses_legalese_sections() {
    let mut lines: Vec<String> = vec!["before the notice".to_string()];
    lines.push("<<THIS ELECTRONIC VERSION OF SOME BOOK".to_string());
    lines.push("IS COPYRIGHT PROTECTED".to_string());
    lines.push(">>".to_string());
    lines.push("after the notice".to_string());
    let text = lines.join("\n");

    let stripped = strip_headers(&text);

    // The delimited section and its markers are gone, the rest survives
    assert_eq!(stripped, "before the notice\nafter the notice");
}

#[test]
fn test_strip_headers_late_start_marker_not_honored() {
    // A start marker past the first 600 content lines must not wipe the
    // accumulated text.
    let mut lines: Vec<String> = (0..650).map(|i| format!("line {}", i)).collect();
    lines.push("*** START OF THE PROJECT GUTENBERG EBOOK LATE ***".to_string());
    lines.push("tail line".to_string());
    let text = lines.join("\n");

    let stripped = strip_headers(&text);
    assert!(stripped.starts_with("line 0"));
    assert!(stripped.contains("line 649"));
    assert!(stripped.ends_with("tail line"));
}

#[test]
fn test_parse_catalog_skips_header_and_non_text_rows() {
    let csv = "\
Text#,Type,Issued,Title,Language,Authors,Subjects,LoCC,Bookshelves
2701,Text,2001-07-01,\"Moby Dick; Or, The Whale\",en,\"Melville, Herman, 1819-1891\",Whaling,PS,Best Books Ever
84,Text,1993-10-01,Frankenstein,en,\"Shelley, Mary Wollstonecraft, 1797-1851\",Horror,PR,Gothic Fiction
9,Sound,2003-01-01,Some Recording,en,Somebody,Audio,M,Music
";

    let entries = parse_catalog(csv);

    // Header row and the Sound row are skipped
    assert_eq!(entries.len(), 2);

    // Quoted titles keep their embedded commas
    assert_eq!(entries[0].id, 2701);
    assert_eq!(entries[0].title, "Moby Dick; Or, The Whale");
    assert_eq!(entries[0].authors, "Melville, Herman, 1819-1891");
    assert_eq!(entries[0].language, "en");

    assert_eq!(entries[1].id, 84);
    assert_eq!(entries[1].title, "Frankenstein");
}

#[test]
fn test_parse_catalog_skips_malformed_rows() {
    let csv = "\
notanid,Text,2003-01-01,Bad Id,en,Nobody,X,Y,Z
5,Text,2001-01-01
11,Text,2008-06-27,Alice's Adventures in Wonderland,en,\"Carroll, Lewis, 1832-1898\",Fantasy,PR,Children
";

    let entries = parse_catalog(csv);

    // Non-numeric ids and short rows fall out, valid rows survive
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, 11);
    assert_eq!(entries[0].title, "Alice's Adventures in Wonderland");
}

#[test]
fn test_parse_catalog_empty_feed() {
    assert!(parse_catalog("").is_empty());
}
