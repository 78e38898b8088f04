use anyhow::{Context, Result};
use log::debug;
use std::path::Path;

use crate::errors::ExtractError;

// @module: PDF text extraction boundary

/// Extract the text of a PDF document as ordered lines
///
/// Thin wrapper over the pdf-extract crate: the document is reconstructed in
/// reading order as best the library can manage, and the result is split on
/// newlines. Blank lines are kept; the parser skips them itself.
pub fn extract_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ExtractError::Unreadable(format!("{}", path.display())).into());
    }

    let text = pdf_extract::extract_text(path)
        .map_err(|e| ExtractError::ExtractionFailed(e.to_string()))
        .with_context(|| format!("Failed to extract text from {}", path.display()))?;

    let lines: Vec<String> = text.lines().map(str::to_string).collect();
    debug!("Extracted {} lines from {}", lines.len(), path.display());

    Ok(lines)
}

/// Extract ordered lines from an in-memory PDF document
///
/// Used when the document arrives as bytes rather than a path (uploads,
/// tests); same contract as [`extract_lines`].
pub fn extract_lines_from_bytes(bytes: &[u8]) -> Result<Vec<String>> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ExtractError::ExtractionFailed(e.to_string()))
        .context("Failed to extract text from in-memory document")?;

    Ok(text.lines().map(str::to_string).collect())
}
