//! PGN parsing utilities for the endgame study database.
//!
//! The database is a large, loosely structured text file, so the parser is
//! deliberately tolerant: games are split on blank lines preceding an
//! `[Event` tag, headers are extracted with a lightweight regex scan, and
//! anything that does not match (move text, comments, stray lines) is
//! ignored rather than rejected.

use std::collections::HashMap;

use regex::Regex;

use crate::position::PositionRecord;

/// Parse raw PGN text into position records.
///
/// A block only yields a record when it carries non-empty `FEN` and
/// `Result` headers; everything else is dropped silently. When a tag
/// appears more than once in a block, the last occurrence wins.
pub fn parse(content: &str) -> Vec<PositionRecord> {
    // Normalize line endings (CRLF -> LF)
    let normalized = content.replace("\r\n", "\n");

    let header_re = Regex::new(r#"\[(\w+)\s+"([^"]*)"\]"#).unwrap();

    let mut records = Vec::new();

    for block in split_blocks(&normalized) {
        if block.trim().is_empty() {
            continue;
        }

        let mut headers: HashMap<&str, &str> = HashMap::new();
        for cap in header_re.captures_iter(block) {
            headers.insert(cap.get(1).unwrap().as_str(), cap.get(2).unwrap().as_str());
        }

        // An empty value counts the same as a missing header.
        let fen = header_or(&headers, "FEN", "");
        let result = header_or(&headers, "Result", "");
        if fen.is_empty() || result.is_empty() {
            continue;
        }

        records.push(PositionRecord {
            event: header_or(&headers, "Event", "Unknown").to_string(),
            white: header_or(&headers, "White", "Unknown").to_string(),
            black: header_or(&headers, "Black", "").to_string(),
            result: result.to_string(),
            fen: fen.to_string(),
            date: header_or(&headers, "Date", "").to_string(),
        });
    }

    records
}

fn header_or<'a>(headers: &HashMap<&str, &'a str>, tag: &str, default: &'a str) -> &'a str {
    match headers.get(tag) {
        Some(value) if !value.is_empty() => value,
        _ => default,
    }
}

/// Split the text on a blank line immediately followed by the next game's
/// `[Event` header. The `[Event` opener stays with the block it introduces;
/// the first block has no leading boundary.
fn split_blocks(content: &str) -> Vec<&str> {
    let boundary_re = Regex::new(r"\n\n\[Event").unwrap();

    let mut blocks = Vec::new();
    let mut start = 0;
    for m in boundary_re.find_iter(content) {
        blocks.push(&content[start..m.start()]);
        start = m.start() + 2;
    }
    blocks.push(&content[start..]);
    blocks
}
