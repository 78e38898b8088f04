use anyhow::{Context, Result};
use std::path::Path;

use crate::errors::ExportError;
use crate::program_parser::MeetProgram;

// @module: Delimited text export (CSV/TSV)

/// Column headers for the heats table, fixed across every artifact
pub const HEATS_HEADERS: [&str; 7] = [
    "Event #",
    "Event Name",
    "Heat",
    "Lane",
    "Name",
    "Team",
    "Seed Time",
];

/// Column headers for the alternates table, fixed across every artifact
pub const ALTERNATES_HEADERS: [&str; 5] =
    ["Event #", "Event Name", "Name", "Team", "Seed Time"];

/// Render the heats table rows, one per entry, in program order
pub fn heat_rows(program: &MeetProgram) -> Vec<Vec<String>> {
    program
        .heats
        .iter()
        .map(|entry| {
            vec![
                entry.event_number.to_string(),
                entry.event_name.clone(),
                entry.heat_number.to_string(),
                entry.lane_number.to_string(),
                entry.swimmer_name.clone(),
                entry.team.clone(),
                entry.seed_time.clone(),
            ]
        })
        .collect()
}

/// Render the alternates table rows, one per entry, in program order
pub fn alternate_rows(program: &MeetProgram) -> Vec<Vec<String>> {
    program
        .alternates
        .iter()
        .map(|entry| {
            vec![
                entry.event_number.to_string(),
                entry.event_name.clone(),
                entry.swimmer_name.clone(),
                entry.team.clone(),
                entry.seed_time.clone(),
            ]
        })
        .collect()
}

/// Render headers plus rows as delimited text
fn rows_to_delimited(headers: &[&str], rows: &[Vec<String>], delimiter: u8) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    writer
        .write_record(headers)
        .context("Failed to write header row")?;
    for row in rows {
        writer.write_record(row).context("Failed to write row")?;
    }

    let bytes = writer
        .into_inner()
        .context("Failed to flush delimited output")?;
    String::from_utf8(bytes).context("Delimited output was not valid UTF-8")
}

/// Heats table as comma-separated text, header row first
pub fn heats_csv(program: &MeetProgram) -> Result<String> {
    rows_to_delimited(&HEATS_HEADERS, &heat_rows(program), b',')
}

/// Alternates table as comma-separated text, header row first
pub fn alternates_csv(program: &MeetProgram) -> Result<String> {
    rows_to_delimited(&ALTERNATES_HEADERS, &alternate_rows(program), b',')
}

/// Heats table as tab-separated text, the flattened clipboard rendering
pub fn heats_tsv(program: &MeetProgram) -> Result<String> {
    rows_to_delimited(&HEATS_HEADERS, &heat_rows(program), b'\t')
}

/// Alternates table as tab-separated text, the flattened clipboard rendering
pub fn alternates_tsv(program: &MeetProgram) -> Result<String> {
    rows_to_delimited(&ALTERNATES_HEADERS, &alternate_rows(program), b'\t')
}

/// Write a fully rendered artifact in a single filesystem write
///
/// The content is rendered before the destination is touched, so a failed
/// export never leaves a partial file behind.
fn write_artifact(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|e| {
        ExportError::WriteFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        }
        .into()
    })
}

/// Write the heats CSV to a file
pub fn write_heats_csv<P: AsRef<Path>>(program: &MeetProgram, path: P) -> Result<()> {
    let content = heats_csv(program)?;
    write_artifact(path.as_ref(), &content)
}

/// Write the alternates CSV to a file
pub fn write_alternates_csv<P: AsRef<Path>>(program: &MeetProgram, path: P) -> Result<()> {
    let content = alternates_csv(program)?;
    write_artifact(path.as_ref(), &content)
}
