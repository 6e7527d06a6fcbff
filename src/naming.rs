//! Page naming: how a source path becomes a page identifier and an output file.
//!
//! Every page has two names:
//! - the **base name**, the file name with its recognized suffix removed, shown
//!   as link text in the index and used as the default identifier
//! - the **output name**, the base name with each whitespace run collapsed to a
//!   single underscore, suffixed `.html`; this is the file actually written and
//!   the href the index links to
//!
//! Pages are flattened into the output root, so `notes/Getting Started.md`
//! becomes `Getting_Started.html` regardless of its directory.

use std::path::Path;

/// Strip the directory and `extension` from `path`.
///
/// - `"docs/intro.txt"`, `".txt"` → `"intro"`
/// - `"My Notes.md"`, `".md"` → `"My Notes"`
/// - `"archive.old.md"`, `".md"` → `"archive.old"`
/// - `"README"`, `".md"` → `"README"` (suffix absent, name kept whole)
/// - `".md"`, `".md"` → `".md"` (a name that is only the suffix is kept)
pub fn base_name(path: &Path, extension: &str) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    match name.strip_suffix(extension) {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => name,
    }
}

/// Replace every run of whitespace with a single `_`.
///
/// - `"Getting Started"` → `"Getting_Started"`
/// - `"a \t b"` → `"a_b"`
/// - `"plain"` → `"plain"`
pub fn collapse_whitespace(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_run = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_run {
                out.push('_');
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

/// Output file name for a page: collapsed base name plus `.html`.
pub fn output_file_name(base_name: &str) -> String {
    format!("{}.html", collapse_whitespace(base_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_name_strips_directory_and_extension() {
        assert_eq!(base_name(Path::new("docs/intro.txt"), ".txt"), "intro");
    }

    #[test]
    fn base_name_keeps_inner_whitespace() {
        assert_eq!(base_name(Path::new("My Notes.md"), ".md"), "My Notes");
    }

    #[test]
    fn base_name_strips_only_final_suffix() {
        assert_eq!(base_name(Path::new("archive.old.md"), ".md"), "archive.old");
    }

    #[test]
    fn base_name_without_suffix_keeps_name() {
        assert_eq!(base_name(Path::new("README"), ".md"), "README");
    }

    #[test]
    fn base_name_suffix_only_file() {
        assert_eq!(base_name(Path::new("dir/.md"), ".md"), ".md");
    }

    #[test]
    fn collapse_single_spaces() {
        assert_eq!(collapse_whitespace("Getting Started"), "Getting_Started");
    }

    #[test]
    fn collapse_mixed_whitespace_run() {
        assert_eq!(collapse_whitespace("a \t  b"), "a_b");
    }

    #[test]
    fn collapse_leading_and_trailing() {
        assert_eq!(collapse_whitespace(" edge "), "_edge_");
    }

    #[test]
    fn collapse_no_whitespace_is_identity() {
        assert_eq!(collapse_whitespace("plain"), "plain");
    }

    #[test]
    fn output_name_appends_html() {
        assert_eq!(output_file_name("The Hound of the Baskervilles"), "The_Hound_of_the_Baskervilles.html");
    }
}
