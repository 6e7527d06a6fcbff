//! CLI output formatting for a finished build.
//!
//! The summary lists every page by its base name with the output file it was
//! written to, and the source it came from as an indented context line:
//!
//! ```text
//! Pages
//! 001 a-study-in-scarlet → a-study-in-scarlet.html
//!     Source: a-study-in-scarlet.txt
//! 002 The Red Circle → The_Red_Circle.html
//!     Source: stories/The Red Circle.md
//!
//! Index → index.html
//! Generated 2 pages → dist
//! ```
//!
//! [`format_build_output`] is pure and returns lines for testability;
//! [`print_build_output`] writes them to stdout. Diagnostics go through
//! `tracing` on stderr and never appear here.

use crate::site::BuildReport;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Path of `path` relative to `root`, or the whole path when it is not below it.
fn relative_display(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .ok()
        .filter(|rel| !rel.as_os_str().is_empty())
        .unwrap_or(path)
        .display()
        .to_string()
}

fn file_name_display(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn format_build_output(report: &BuildReport, input: &Path, output: &Path) -> Vec<String> {
    let mut lines = Vec::new();

    if !report.pages.is_empty() {
        lines.push("Pages".to_string());
        for (i, page) in report.pages.iter().enumerate() {
            lines.push(format!(
                "{} {} \u{2192} {}",
                format_index(i + 1),
                page.base_name,
                file_name_display(&page.output)
            ));
            lines.push(format!(
                "    Source: {}",
                relative_display(&page.source, input)
            ));
        }
        lines.push(String::new());
    }

    if let Some(index) = &report.index {
        lines.push(format!("Index \u{2192} {}", file_name_display(index)));
    }

    let noun = if report.pages.len() == 1 { "page" } else { "pages" };
    lines.push(format!(
        "Generated {} {} \u{2192} {}",
        report.pages.len(),
        noun,
        output.display()
    ));
    lines
}

pub fn print_build_output(report: &BuildReport, input: &Path, output: &Path) {
    for line in format_build_output(report, input, output) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::GeneratedPage;
    use std::path::PathBuf;

    fn page(source: &str, base: &str, output: &str) -> GeneratedPage {
        GeneratedPage {
            source: PathBuf::from(source),
            base_name: base.to_string(),
            output: PathBuf::from(output),
        }
    }

    #[test]
    fn format_index_pads_to_three_digits() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(1000), "1000");
    }

    #[test]
    fn directory_build_lists_pages_and_index() {
        let report = BuildReport {
            pages: vec![
                page("content/a.txt", "a", "dist/a.html"),
                page("content/stories/The Red Circle.md", "The Red Circle", "dist/The_Red_Circle.html"),
            ],
            index: Some(PathBuf::from("dist/index.html")),
        };

        let lines = format_build_output(&report, Path::new("content"), Path::new("dist"));
        assert_eq!(
            lines,
            vec![
                "Pages",
                "001 a \u{2192} a.html",
                "    Source: a.txt",
                "002 The Red Circle \u{2192} The_Red_Circle.html",
                "    Source: stories/The Red Circle.md",
                "",
                "Index \u{2192} index.html",
                "Generated 2 pages \u{2192} dist",
            ]
        );
    }

    #[test]
    fn single_file_build_shows_full_source_and_no_index() {
        let report = BuildReport {
            pages: vec![page("notes/solo.txt", "solo", "dist/solo.html")],
            index: None,
        };

        let lines = format_build_output(&report, Path::new("notes/solo.txt"), Path::new("dist"));
        assert_eq!(
            lines,
            vec![
                "Pages",
                "001 solo \u{2192} solo.html",
                "    Source: notes/solo.txt",
                "",
                "Generated 1 page \u{2192} dist",
            ]
        );
    }

    #[test]
    fn empty_directory_build_shows_only_index() {
        let report = BuildReport {
            pages: vec![],
            index: Some(PathBuf::from("dist/index.html")),
        };

        let lines = format_build_output(&report, Path::new("content"), Path::new("dist"));
        assert_eq!(lines, vec!["Index \u{2192} index.html", "Generated 0 pages \u{2192} dist"]);
    }
}
