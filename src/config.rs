//! Run configuration.
//!
//! A run needs three values: the input path, the output directory and the
//! stylesheet URL. They come from three layers, highest priority first:
//!
//! 1. a JSON config file named with `--config`
//! 2. command-line options
//! 3. defaults (`<cwd>/dist`, no stylesheet)
//!
//! ## Config File
//!
//! ```json
//! {
//!   "input": "./Sherlock-Holmes-Selected-Stories",
//!   "output": "./build",
//!   "stylesheet": "https://cdn.jsdelivr.net/npm/water.css@2/out/water.css"
//! }
//! ```
//!
//! Keys present in the file override the matching command-line options; absent
//! or empty keys leave them alone. A config file must name an `input`. Unknown
//! keys are ignored so the same file can carry settings for other tools.
//!
//! ## Output Fallback
//!
//! An output directory that does not exist is not created on demand: the run
//! warns and falls back to `<cwd>/dist`.
//!
//! The resolved [`RunConfig`] is immutable and handed to
//! [`crate::site::SiteBuilder`].

use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// Name of the default output directory, created under the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "dist";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Can't read config file {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("Can't parse config file {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("input <file or directory> is not specified in config file {0}")]
    MissingInput(PathBuf),
    #[error("required option input <file or directory> is not specified")]
    NoInput,
    #[error("Unable to determine the current directory: {0}")]
    CurrentDir(io::Error),
}

/// Values collected from the command line, all optional.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub stylesheet: Option<String>,
    pub config: Option<PathBuf>,
}

/// Contents of a JSON config file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub input: Option<String>,
    pub output: Option<String>,
    pub stylesheet: Option<String>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Source file or directory.
    pub input: PathBuf,
    /// Directory that is wiped and repopulated.
    pub output: PathBuf,
    /// Global stylesheet URL; empty for none.
    pub stylesheet: String,
}

impl RunConfig {
    /// Resolve against the process working directory.
    pub fn from_options(options: Options) -> Result<Self, ConfigError> {
        let cwd = std::env::current_dir().map_err(ConfigError::CurrentDir)?;
        Self::resolve(options, &cwd)
    }

    /// Merge config file, command-line options and defaults.
    ///
    /// `cwd` anchors the default output directory.
    pub fn resolve(mut options: Options, cwd: &Path) -> Result<Self, ConfigError> {
        if let Some(config_path) = options.config.clone() {
            let file = load_config_file(&config_path)?;
            apply_config_file(&mut options, file);
        }

        let input = options.input.ok_or(ConfigError::NoInput)?;
        let default_output = cwd.join(DEFAULT_OUTPUT_DIR);
        let output = resolve_output(options.output, default_output);

        Ok(Self {
            input,
            output,
            stylesheet: options.stylesheet.unwrap_or_default(),
        })
    }
}

/// Read and parse a JSON config file; it must name an input.
pub fn load_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let file: ConfigFile = serde_json::from_str(&content).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    if file.input.as_deref().is_none_or(str::is_empty) {
        return Err(ConfigError::MissingInput(path.to_path_buf()));
    }
    Ok(file)
}

/// Overlay non-empty config file values onto the command-line options.
fn apply_config_file(options: &mut Options, file: ConfigFile) {
    let non_empty = |v: Option<String>| v.filter(|s| !s.is_empty());
    if let Some(input) = non_empty(file.input) {
        options.input = Some(PathBuf::from(input));
    }
    if let Some(output) = non_empty(file.output) {
        options.output = Some(PathBuf::from(output));
    }
    if let Some(stylesheet) = non_empty(file.stylesheet) {
        options.stylesheet = Some(stylesheet);
    }
}

/// Pick the output directory, falling back to `default` when the requested
/// one is empty or missing.
pub fn resolve_output(requested: Option<PathBuf>, default: PathBuf) -> PathBuf {
    match requested {
        Some(path) if path.as_os_str().is_empty() || path == default => default,
        Some(path) if path.is_dir() => path,
        Some(path) => {
            warn!(
                requested = %path.display(),
                fallback = %default.display(),
                "output directory doesn't exist, writing to the default instead"
            );
            default
        }
        None => default,
    }
}
