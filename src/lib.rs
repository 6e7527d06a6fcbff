//! # Pagewright
//!
//! A minimal static site generator for plain-text and Markdown documents.
//! Point it at a file or a directory tree: every `.txt` and `.md` file becomes a
//! standalone HTML page, and a directory build adds an `index.html` linking
//! them all.
//!
//! # Pipeline
//!
//! ```text
//! input/  ──scan──▶  source paths  ──read──▶  frontmatter (.md)  ──render──▶  dist/*.html
//!                                                                   └──────▶  dist/index.html
//! ```
//!
//! Every run is a full rebuild: the output directory is wiped, recreated and
//! repopulated. There is no cache, no watch mode and no template engine.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Depth-first discovery of files by suffix |
//! | [`frontmatter`] | `---` metadata block parsing and `{{ key }}` substitution |
//! | [`render`] | Plain-text and Markdown rendering into the fixed HTML skeleton |
//! | [`site`] | The build state machine: validate, prepare output, process |
//! | [`config`] | CLI options, JSON config file and defaults merged into a `RunConfig` |
//! | [`types`] | Shared types: `SourceFile`, `PageMetadata`, `RenderedPage` |
//! | [`naming`] | Base names and whitespace-collapsed output names |
//! | [`output`] | CLI summary formatting |
//!
//! # Design Decisions
//!
//! ## Literal HTML Assembly
//!
//! Pages are assembled with plain string formatting rather than a template or
//! HTML macro crate. The exact byte layout (CRLF line breaks, tab indentation)
//! is part of the output contract, and literal assembly keeps it visible in
//! one place: [`types::RenderedPage::to_html`].
//!
//! ## Flat Output
//!
//! Pages land in the output root whatever their source directory. Two sources
//! with the same base name therefore share an output file; the later one wins
//! and a warning is logged.
//!
//! ## Fail Fast
//!
//! Input and config problems are reported before anything on disk changes.
//! Once processing starts, the first read or write error ends the run.

pub mod config;
pub mod frontmatter;
pub mod naming;
pub mod output;
pub mod render;
pub mod scan;
pub mod site;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
