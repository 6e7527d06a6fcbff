//! Shared types passed between the walker, the renderer and the site builder.
//!
//! None of these outlive a single run: a [`SourceFile`] is created when a path
//! is discovered and dropped once its page is written, and [`PageMetadata`] is
//! parsed fresh for every Markdown document.

use crate::naming;
use crate::render::RenderError;
use std::path::{Path, PathBuf};

/// The kinds of source document the renderer knows how to convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// `.txt`: paragraphs separated by blank lines, optional title line.
    Text,
    /// `.md`: CommonMark with optional `---` front matter.
    Markdown,
}

impl SourceKind {
    /// Every recognized kind, in the order a directory scan processes them.
    pub const ALL: [SourceKind; 2] = [SourceKind::Text, SourceKind::Markdown];

    /// File suffix, including the dot.
    pub fn extension(self) -> &'static str {
        match self {
            SourceKind::Text => ".txt",
            SourceKind::Markdown => ".md",
        }
    }

    /// Look up a kind by its exact (case-sensitive) suffix.
    pub fn from_extension(extension: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.extension() == extension)
    }

    /// The recognized kind whose suffix `path` ends with, if any.
    pub fn for_path(path: &Path) -> Option<Self> {
        let path = path.to_string_lossy();
        Self::ALL
            .into_iter()
            .find(|k| path.ends_with(k.extension()))
    }
}

/// One input document, identified by its path and the suffix it was matched on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    /// Suffix the file was discovered with, e.g. `".md"`.
    pub extension: String,
    /// File name with the suffix removed; the page's identifier.
    pub base_name: String,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, extension: &str) -> Self {
        let path = path.into();
        let base_name = naming::base_name(&path, extension);
        Self {
            path,
            extension: extension.to_string(),
            base_name,
        }
    }

    /// Resolve the extension to a renderable kind.
    pub fn kind(&self) -> Result<SourceKind, RenderError> {
        SourceKind::from_extension(&self.extension).ok_or_else(|| RenderError::UnsupportedType {
            extension: self.extension.clone(),
        })
    }

    /// Name of the HTML file this source is written to.
    pub fn output_file_name(&self) -> String {
        naming::output_file_name(&self.base_name)
    }
}

/// Metadata read from a Markdown document's front matter.
///
/// Absent fields keep their defaults: empty strings and `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMetadata {
    pub id: String,
    pub title: String,
    pub hide_title: bool,
    pub description: String,
    /// Overrides the run's stylesheet for this page only.
    pub stylesheet: String,
    pub image: String,
}

impl PageMetadata {
    /// String-valued fields as `(key, value)` pairs, used for placeholder
    /// substitution.
    pub fn text_fields(&self) -> [(&'static str, &str); 5] {
        [
            ("id", self.id.as_str()),
            ("title", self.title.as_str()),
            ("description", self.description.as_str()),
            ("stylesheet", self.stylesheet.as_str()),
            ("image", self.image.as_str()),
        ]
    }
}

/// A fully rendered page, ready to be serialized with [`RenderedPage::to_html`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    /// Page title; may be empty, in which case `<title>` is empty and no `<h1>` is emitted.
    pub title: String,
    /// Emit the `<h1>` heading for a non-empty title.
    pub show_heading: bool,
    pub body_html: String,
    /// Effective stylesheet URL; empty means no `<link>`.
    pub stylesheet_url: String,
}
