//! Shared test utilities for the pagewright test suite.
//!
//! Builds throwaway source trees and inspects generated output.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! write_file(tmp.path(), "content/a.txt", "Hello");
//! // ... run a build into tmp/dist ...
//! assert_eq!(output_names(&tmp.path().join("dist")), vec!["a.html", "index.html"]);
//! ```

use regex::Regex;
use std::path::{Path, PathBuf};

// =========================================================================
// Source trees
// =========================================================================

/// Write `content` to `root/rel`, creating parent directories. Returns the path.
pub fn write_file(root: &Path, rel: &str, content: &str) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
    path
}

// =========================================================================
// Output inspection — panics with a clear message on miss
// =========================================================================

/// Read a generated file. Panics if missing.
pub fn read_output(dir: &Path, name: &str) -> String {
    std::fs::read_to_string(dir.join(name)).unwrap_or_else(|e| {
        let names = output_names(dir);
        panic!("output '{name}' not readable ({e}). Available: {names:?}")
    })
}

/// File names directly inside `dir`, sorted.
pub fn output_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .map(|e| e.file_name().to_string_lossy().to_string())
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}

/// Every `<a href="...">text</a>` in document order, as `(href, text)`.
pub fn anchors(html: &str) -> Vec<(String, String)> {
    let re = Regex::new(r#"<a href="([^"]*)">([^<]*)</a>"#).unwrap();
    re.captures_iter(html)
        .map(|c| (c[1].to_string(), c[2].to_string()))
        .collect()
}
