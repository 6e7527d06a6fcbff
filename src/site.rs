//! Site building: one full run from input path to populated output directory.
//!
//! A run moves through fixed stages and stops at the first fatal error:
//!
//! ```text
//! Uninitialized ─validate─▶ Validated ─prepare─▶ OutputPrepared ─process─▶ Processing ─▶ Done
//!        └──────────────┴──────────────────┴────────────────────┴──────▶ Failed
//! ```
//!
//! - **validate**: the input must exist and be readable, and must not sit
//!   inside the output directory. A single input file must also have a
//!   recognized extension. Nothing is touched on disk yet.
//! - **prepare**: the output directory is removed (a missing one is fine) and
//!   created again, empty.
//! - **process**: a single file becomes one page and no index. A directory is
//!   walked once per recognized extension (`.txt` then `.md`); every match
//!   becomes a page and `index.html` links them all in discovery order.
//!
//! Every page is written flat into the output root as
//! [`crate::naming::output_file_name`]. Sources that are not valid UTF-8 are
//! decoded lossily with a warning. Any read or write error aborts the run;
//! pages already written stay on disk.

use crate::config::RunConfig;
use crate::render::{self, RenderError};
use crate::scan::{self, ScanError};
use crate::types::{SourceFile, SourceKind};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// File name of the generated index page.
pub const INDEX_FILE: &str = "index.html";

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Input file or directory \"{0}\" doesn't exist.")]
    InputNotFound(PathBuf),
    #[error("Can't access file or directory {0}")]
    AccessDenied(PathBuf),
    #[error("Can't access input {path}: {source}")]
    Input { path: PathBuf, source: io::Error },
    #[error("Input {input} is inside the output directory {output}, which is cleared on every run")]
    InputInsideOutput { input: PathBuf, output: PathBuf },
    #[error("Can't write output {path}: {source}")]
    OutputWrite { path: PathBuf, source: io::Error },
    #[error("Can't read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("{path}: {source}")]
    UnsupportedType { path: PathBuf, source: RenderError },
    #[error(transparent)]
    Scan(#[from] ScanError),
}

/// Where a run currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Uninitialized,
    Validated,
    OutputPrepared,
    Processing,
    Done,
    Failed,
}

/// What the input path turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    File(SourceKind),
    Directory,
}

/// A page written during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPage {
    pub source: PathBuf,
    pub base_name: String,
    pub output: PathBuf,
}

/// Summary of a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Pages in discovery order.
    pub pages: Vec<GeneratedPage>,
    /// Path of `index.html`; only set for directory input.
    pub index: Option<PathBuf>,
}

impl BuildReport {
    /// Base names in index order.
    pub fn base_names(&self) -> Vec<String> {
        self.pages.iter().map(|p| p.base_name.clone()).collect()
    }
}

/// Drives one run over an immutable [`RunConfig`].
#[derive(Debug)]
pub struct SiteBuilder {
    config: RunConfig,
    stage: Stage,
}

impl SiteBuilder {
    pub fn new(config: RunConfig) -> Self {
        Self {
            config,
            stage: Stage::Uninitialized,
        }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Run every stage. On error the builder is left in [`Stage::Failed`].
    pub fn run(&mut self) -> Result<BuildReport, BuildError> {
        let result = self.run_stages();
        self.stage = match result {
            Ok(_) => Stage::Done,
            Err(_) => Stage::Failed,
        };
        result
    }

    fn run_stages(&mut self) -> Result<BuildReport, BuildError> {
        let kind = validate_input(&self.config.input)?;
        check_output_location(&self.config.input, &self.config.output)?;
        self.advance(Stage::Validated);

        prepare_output_directory(&self.config.output)?;
        self.advance(Stage::OutputPrepared);

        self.advance(Stage::Processing);
        match kind {
            InputKind::File(source_kind) => {
                let source = SourceFile::new(&self.config.input, source_kind.extension());
                let page = self.write_page(&source)?;
                Ok(BuildReport {
                    pages: vec![page],
                    index: None,
                })
            }
            InputKind::Directory => self.build_directory(),
        }
    }

    fn advance(&mut self, stage: Stage) {
        info!(from = ?self.stage, to = ?stage, "build stage");
        self.stage = stage;
    }

    fn build_directory(&self) -> Result<BuildReport, BuildError> {
        let mut pages = Vec::new();
        let mut written = HashSet::new();
        for kind in SourceKind::ALL {
            for path in scan::find(&self.config.input, kind.extension())? {
                let source = SourceFile::new(path, kind.extension());
                let page = self.write_page(&source)?;
                if !written.insert(page.output.clone()) {
                    warn!(
                        source = %source.path.display(),
                        output = %page.output.display(),
                        "output name already used by another source; it was overwritten"
                    );
                }
                pages.push(page);
            }
        }

        let base_names: Vec<String> = pages.iter().map(|p| p.base_name.clone()).collect();
        let index = render::render_index(&base_names, &self.config.stylesheet);
        let index_path = self.config.output.join(INDEX_FILE);
        write_output(&index_path, &index.to_html())?;
        info!(path = %index_path.display(), pages = pages.len(), "wrote index");

        Ok(BuildReport {
            pages,
            index: Some(index_path),
        })
    }

    /// Read, render and write one source.
    fn write_page(&self, source: &SourceFile) -> Result<GeneratedPage, BuildError> {
        let bytes = fs::read(&source.path).map_err(|e| BuildError::Read {
            path: source.path.clone(),
            source: e,
        })?;
        let raw = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                warn!(
                    source = %source.path.display(),
                    "source is not valid UTF-8; invalid bytes replaced"
                );
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };
        let page = render::render_page(source, &raw, &self.config.stylesheet).map_err(|e| {
            BuildError::UnsupportedType {
                path: source.path.clone(),
                source: e,
            }
        })?;
        let output = self.config.output.join(source.output_file_name());
        write_output(&output, &page.to_html())?;
        info!(source = %source.path.display(), output = %output.display(), "wrote page");

        Ok(GeneratedPage {
            source: source.path.clone(),
            base_name: source.base_name.clone(),
            output,
        })
    }
}

/// Check that `input` exists and is readable, and classify it.
pub fn validate_input(input: &Path) -> Result<InputKind, BuildError> {
    let metadata = fs::metadata(input).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => BuildError::InputNotFound(input.to_path_buf()),
        io::ErrorKind::PermissionDenied => BuildError::AccessDenied(input.to_path_buf()),
        _ => BuildError::Input {
            path: input.to_path_buf(),
            source: e,
        },
    })?;

    let readable = if metadata.is_dir() {
        fs::read_dir(input).map(|_| ())
    } else {
        fs::File::open(input).map(|_| ())
    };
    readable.map_err(|_| BuildError::AccessDenied(input.to_path_buf()))?;

    if metadata.is_dir() {
        return Ok(InputKind::Directory);
    }
    match SourceKind::for_path(input) {
        Some(kind) => Ok(InputKind::File(kind)),
        None => {
            let extension = input
                .extension()
                .map(|e| format!(".{}", e.to_string_lossy()))
                .unwrap_or_default();
            Err(BuildError::UnsupportedType {
                path: input.to_path_buf(),
                source: RenderError::UnsupportedType { extension },
            })
        }
    }
}

/// Refuse an input inside `output`: preparing the output would delete it.
///
/// A missing output directory cannot contain anything and always passes.
pub fn check_output_location(input: &Path, output: &Path) -> Result<(), BuildError> {
    let Ok(output) = fs::canonicalize(output) else {
        return Ok(());
    };
    let input = fs::canonicalize(input).map_err(|source| BuildError::Input {
        path: input.to_path_buf(),
        source,
    })?;
    if input.starts_with(&output) {
        return Err(BuildError::InputInsideOutput { input, output });
    }
    Ok(())
}

/// Remove `output` if present and recreate it empty.
pub fn prepare_output_directory(output: &Path) -> Result<(), BuildError> {
    let to_write_error = |source: io::Error| BuildError::OutputWrite {
        path: output.to_path_buf(),
        source,
    };
    match fs::remove_dir_all(output) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(to_write_error(e)),
    }
    fs::create_dir_all(output).map_err(to_write_error)
}

fn write_output(path: &Path, content: &str) -> Result<(), BuildError> {
    fs::write(path, content).map_err(|source| BuildError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}
