//! Static export of the pre-rendered page.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::render_page;

/// File name written when none is given.
pub const DEFAULT_FILE_NAME: &str = "index.html";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Where the exported page goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
    pub file_name: String,
}

impl ExportOptions {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            file_name: DEFAULT_FILE_NAME.to_owned(),
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn target(&self) -> PathBuf {
        self.out_dir.join(&self.file_name)
    }
}

/// Result of a successful export.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub bytes: usize,
}

/// Render the page and write it under `options.out_dir`.
pub fn export_site(options: &ExportOptions) -> Result<ExportSummary, ExportError> {
    ensure_dir(&options.out_dir)?;

    let html = render_page();
    let path = options.target();
    fs::write(&path, &html).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), bytes = html.len(), "page exported");
    Ok(ExportSummary {
        path,
        bytes: html.len(),
    })
}

fn ensure_dir(dir: &Path) -> Result<(), ExportError> {
    if dir.is_dir() {
        return Ok(());
    }
    debug!(dir = %dir.display(), "creating output directory");
    fs::create_dir_all(dir).map_err(|source| ExportError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}
