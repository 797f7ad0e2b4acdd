//! Per-file text extraction
//!
//! Text-like files are decoded as UTF-8 with a Windows-1252 fallback;
//! content carrying NUL bytes is rejected as binary rather than decoded.
//! PDF extraction is a build-time capability behind the `pdf` feature:
//! without it, PDF files index as a placeholder naming the file.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Extract the textual content of a single file.
pub fn extract_file(path: &Path) -> Result<String> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    if ext == "pdf" {
        extract_pdf(path)
    } else {
        read_text(path)
    }
}

fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;

    if crate::is_binary(&bytes) {
        return Err(Error::Decode {
            path: path.display().to_string(),
            reason: "content contains NUL bytes".to_string(),
        });
    }

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            tracing::debug!("{} is not UTF-8, decoding as Windows-1252", path.display());
            let (text, _, _) = encoding_rs::WINDOWS_1252.decode(err.as_bytes());
            Ok(text.into_owned())
        }
    }
}

#[cfg(feature = "pdf")]
fn extract_pdf(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    pdf_extract::extract_text_from_mem(&bytes).map_err(|e| Error::Decode {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

#[cfg(not(feature = "pdf"))]
fn extract_pdf(path: &Path) -> Result<String> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown");
    Ok(format!(
        "[PDF file: {}] - rebuild docdex with the `pdf` feature to index PDF content",
        name
    ))
}
