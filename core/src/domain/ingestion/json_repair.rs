use std::sync::LazyLock;

use regex::Regex;

use crate::domain::ingestion::entities::ParsedItem;

// Flat objects only. A truncated object never matches and is dropped
// without being counted; see `parse_items`.
static OBJECT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[^}]*\}").expect("object pattern is valid"));

/// Recovers the JSON array from the model's free-text reply: everything
/// before the first `[` is discarded, then each flat `{...}` substring is
/// collected and the array reassembled around them. Returns `None` when the
/// reply contains no array at all.
pub fn extract_object_candidates(text: &str) -> Option<Vec<&str>> {
    let start = text.find('[')?;
    let partial = &text[start..];

    Some(
        OBJECT_PATTERN
            .find_iter(partial)
            .map(|m| m.as_str())
            .collect(),
    )
}

/// Repair plus strict per-item validation. Each candidate object either
/// decodes into a [`ParsedItem`] or is counted as rejected.
pub fn parse_items(text: &str) -> Option<(Vec<ParsedItem>, usize)> {
    let candidates = extract_object_candidates(text)?;

    let mut items = Vec::new();
    let mut rejected = 0usize;

    for candidate in candidates {
        match serde_json::from_str::<ParsedItem>(candidate) {
            Ok(item) => items.push(item),
            Err(err) => {
                tracing::warn!("rejected scan item {candidate}: {err}");
                rejected += 1;
            }
        }
    }

    Some((items, rejected))
}
