//! Front matter for Markdown documents.
//!
//! A Markdown source may open with a metadata block delimited by `---` lines:
//!
//! ```text
//! ---
//! title: A Study in Scarlet
//! description: The first Holmes novel
//! hide_title: true
//! ---
//! Published in {{ title }} form in 1887.
//! ```
//!
//! Each `key: value` line is split on the first `": "`. Only the keys of
//! [`PageMetadata`] are kept; anything else is ignored, as are lines with no
//! separator. After parsing, every ` {{ key }}` placeholder in the body
//! (case-insensitive, one leading space) is replaced with the field's value
//! padded by single spaces. Fields left empty are not substituted.
//!
//! Parsing never fails. A block that does not split into exactly
//! `["", metadata, body]` is flagged as malformed and extracted on a
//! best-effort basis.

use crate::types::PageMetadata;
use regex::{NoExpand, RegexBuilder};

const DELIMITER: &str = "---";

/// A Markdown document split into metadata and a substituted body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDocument {
    pub metadata: PageMetadata,
    /// Body text with placeholders replaced, ready for Markdown rendering.
    pub body: String,
    /// The front matter block was present but not delimited as expected.
    pub malformed: bool,
}

/// Split, parse and substitute in one step.
pub fn parse(raw: &str) -> ParsedDocument {
    let (block, body, malformed) = split_front_matter(raw);
    let metadata = parse_metadata(block);
    let body = substitute_placeholders(&metadata, &body);
    ParsedDocument {
        metadata,
        body,
        malformed,
    }
}

/// Separate the metadata block from the body.
///
/// Returns `(metadata_block, body, malformed)`. Documents that do not start
/// with `---` have no metadata and are returned whole.
pub fn split_front_matter(raw: &str) -> (&str, String, bool) {
    if !raw.starts_with(DELIMITER) {
        return ("", raw.to_string(), false);
    }

    let segments: Vec<&str> = raw.split(DELIMITER).collect();
    let malformed = segments.len() != 3 || !segments[0].is_empty();
    let block = segments.get(1).copied().unwrap_or_default();
    let body = segments.get(2..).map(|rest| rest.join(DELIMITER)).unwrap_or_default();
    (block, body, malformed)
}

/// Read recognized `key: value` lines from a metadata block.
pub fn parse_metadata(block: &str) -> PageMetadata {
    let mut metadata = PageMetadata::default();
    for line in block.lines().filter(|l| !l.is_empty()) {
        let Some((key, value)) = line.split_once(": ") else {
            continue;
        };
        match key {
            "id" => metadata.id = value.to_string(),
            "title" => metadata.title = value.to_string(),
            "hide_title" | "hideTitle" => metadata.hide_title = parse_bool(value),
            "description" => metadata.description = value.to_string(),
            "stylesheet" => metadata.stylesheet = value.to_string(),
            "image" => metadata.image = value.to_string(),
            _ => {}
        }
    }
    metadata
}

/// `true`/`false` in any case; anything else is `false`.
fn parse_bool(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

/// Replace ` {{ key }}` with ` value ` for every non-empty text field.
pub fn substitute_placeholders(metadata: &PageMetadata, body: &str) -> String {
    let mut body = body.to_string();
    for (key, value) in metadata.text_fields() {
        if value.is_empty() {
            continue;
        }
        let pattern = format!(r" \{{\{{ {} \}}\}}", regex::escape(key));
        let re = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .expect("placeholder regex");
        let replacement = format!(" {value} ");
        body = re.replace_all(&body, NoExpand(&replacement)).into_owned();
    }
    body
}
