use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Find files with a specific extension in a directory (non-recursive)
    pub fn find_files<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();
        let normalized_ext = extension.trim_start_matches('.');

        for entry in WalkDir::new(dir.as_ref()).max_depth(1).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() {
                if let Some(ext) = path.extension() {
                    if ext.to_string_lossy().eq_ignore_ascii_case(normalized_ext) {
                        result.push(path.to_path_buf());
                    }
                }
            }
        }

        Ok(result)
    }

    /// Find the PDF documents in a directory, sorted case-insensitively by name
    ///
    /// This is the candidate list shown by the interactive picker when the
    /// tool is invoked without paths.
    pub fn discover_pdfs<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
        let mut pdfs = Self::find_files(dir, "pdf")?;
        pdfs.sort_by_key(|p| {
            p.file_name()
                .map(|n| n.to_string_lossy().to_lowercase())
                .unwrap_or_default()
        });
        Ok(pdfs)
    }

    /// Resolve a 1-based selection string against the candidate list
    ///
    /// The prompt itself lives in the binary; this is the validation step,
    /// so an invalid selection is an error before anything is read or
    /// written.
    pub fn select_pdf(pdfs: &[PathBuf], choice: &str) -> Result<PathBuf> {
        if pdfs.is_empty() {
            return Err(anyhow!("No PDFs found in the current directory"));
        }

        let idx: usize = choice
            .trim()
            .parse()
            .map_err(|_| anyhow!("Selection must be a number"))?;
        if idx < 1 || idx > pdfs.len() {
            return Err(anyhow!("Selection out of range"));
        }

        Ok(pdfs[idx - 1].clone())
    }

    // @generates: Sibling CSV path for a workbook output path
    // @params: workbook_path, suffix ("heats" or "alternates")
    pub fn csv_sibling_path<P: AsRef<Path>>(workbook_path: P, suffix: &str) -> PathBuf {
        let workbook_path = workbook_path.as_ref();
        let stem = workbook_path.file_stem().unwrap_or_default();

        let mut filename = stem.to_string_lossy().to_string();
        filename.push('_');
        filename.push_str(suffix);
        filename.push_str(".csv");

        workbook_path
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(filename)
    }

    /// Default workbook output path for an input document: same location,
    /// xlsx extension
    pub fn default_output_path<P: AsRef<Path>>(input: P) -> PathBuf {
        input.as_ref().with_extension("xlsx")
    }
}
