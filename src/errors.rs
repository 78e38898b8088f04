/*!
 * Error types for the heatsheet application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when extracting text from a program document
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Error when the input document cannot be found or read
    #[error("Input document is not readable: {0}")]
    Unreadable(String),

    /// Error from the underlying PDF text extraction library
    #[error("Failed to extract text from document: {0}")]
    ExtractionFailed(String),
}

/// Errors that can occur when writing output artifacts
#[derive(Error, Debug)]
pub enum ExportError {
    /// Error building the workbook in memory
    #[error("Failed to build workbook: {0}")]
    WorkbookBuild(String),

    /// Error writing an output artifact to disk
    #[error("Failed to write output file {path}: {message}")]
    WriteFailed {
        /// Destination path that could not be written
        path: String,
        /// Underlying error message
        message: String,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from text extraction
    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),

    /// Error from tabular export
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
