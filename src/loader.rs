//! Reading notes from disk and writing summaries back.
//!
//! Plain text is read as UTF-8; `.pdf` files go through pdf-extract.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read notes: {0}")]
    ReadError(#[source] std::io::Error),
    #[error("failed to extract text from PDF: {0}")]
    PdfError(String),
    #[error("no text found in {0}")]
    EmptyInput(PathBuf),
    #[error("failed to write summary: {0}")]
    WriteError(#[source] std::io::Error),
    #[error("no summary to save")]
    NothingToSave,
}

/// Notes loaded from a file
#[derive(Debug, Clone)]
pub struct Notes {
    /// Where the notes came from
    pub path: PathBuf,
    /// Raw text content
    pub text: String,
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Load notes from a text or PDF file
pub fn load_notes(path: &Path) -> Result<Notes, LoadError> {
    let text = if is_pdf(path) {
        pdf_extract::extract_text(path).map_err(|e| LoadError::PdfError(e.to_string()))?
    } else {
        fs::read_to_string(path).map_err(LoadError::ReadError)?
    };

    if text.trim().is_empty() {
        return Err(LoadError::EmptyInput(path.to_path_buf()));
    }

    info!(path = %path.display(), chars = text.chars().count(), "loaded notes");
    Ok(Notes {
        path: path.to_path_buf(),
        text,
    })
}

/// Save a summary verbatim as UTF-8, refusing to write an empty one
pub fn save_summary(path: &Path, summary: &str) -> Result<(), LoadError> {
    let content = summary.trim();
    if content.is_empty() {
        return Err(LoadError::NothingToSave);
    }
    fs::write(path, content).map_err(LoadError::WriteError)?;
    info!(path = %path.display(), "saved summary");
    Ok(())
}
