use anyhow::Result;
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use std::path::Path;

use crate::errors::ExportError;
use crate::program_parser::MeetProgram;
use crate::tabular::{ALTERNATES_HEADERS, HEATS_HEADERS};

// @module: Spreadsheet workbook export

/// Sheet names for the two workbook tabs
#[derive(Debug, Clone)]
pub struct SheetNames {
    /// Name of the heats sheet
    pub heats: String,

    /// Name of the alternates sheet
    pub alternates: String,
}

impl Default for SheetNames {
    fn default() -> Self {
        SheetNames {
            heats: "Heats".to_string(),
            alternates: "Alternates".to_string(),
        }
    }
}

/// Build the two-sheet workbook in memory and return the xlsx bytes
///
/// One sheet per table, header row first, one record per subsequent row in
/// program order. Event/heat/lane numbers are written as numeric cells; the
/// seed time is always a string cell so values like "NT" or "1:02.34" survive
/// untouched.
pub fn build_workbook(program: &MeetProgram, sheets: &SheetNames) -> Result<Vec<u8>> {
    build_workbook_inner(program, sheets)
        .map_err(|e| ExportError::WorkbookBuild(e.to_string()).into())
}

fn build_workbook_inner(program: &MeetProgram, sheets: &SheetNames) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let heats_sheet = workbook.add_worksheet();
    heats_sheet.set_name(sheets.heats.as_str())?;
    write_headers(heats_sheet, &HEATS_HEADERS, &header_format)?;
    for (i, entry) in program.heats.iter().enumerate() {
        let row = (i + 1) as u32;
        heats_sheet.write_number(row, 0, entry.event_number)?;
        heats_sheet.write_string(row, 1, entry.event_name.as_str())?;
        heats_sheet.write_number(row, 2, entry.heat_number)?;
        heats_sheet.write_number(row, 3, entry.lane_number)?;
        heats_sheet.write_string(row, 4, entry.swimmer_name.as_str())?;
        heats_sheet.write_string(row, 5, entry.team.as_str())?;
        heats_sheet.write_string(row, 6, entry.seed_time.as_str())?;
    }

    let alternates_sheet = workbook.add_worksheet();
    alternates_sheet.set_name(sheets.alternates.as_str())?;
    write_headers(alternates_sheet, &ALTERNATES_HEADERS, &header_format)?;
    for (i, entry) in program.alternates.iter().enumerate() {
        let row = (i + 1) as u32;
        alternates_sheet.write_number(row, 0, entry.event_number)?;
        alternates_sheet.write_string(row, 1, entry.event_name.as_str())?;
        alternates_sheet.write_string(row, 2, entry.swimmer_name.as_str())?;
        alternates_sheet.write_string(row, 3, entry.team.as_str())?;
        alternates_sheet.write_string(row, 4, entry.seed_time.as_str())?;
    }

    workbook.save_to_buffer()
}

/// Write a bold, frozen header row
fn write_headers(
    sheet: &mut Worksheet,
    headers: &[&str],
    format: &Format,
) -> Result<(), XlsxError> {
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, format)?;
    }
    sheet.set_freeze_panes(1, 0)?;
    Ok(())
}

/// Write the workbook to a file
///
/// The workbook is fully rendered in memory first, so a failed export leaves
/// no partial file behind.
pub fn write_workbook<P: AsRef<Path>>(
    program: &MeetProgram,
    sheets: &SheetNames,
    path: P,
) -> Result<()> {
    let path = path.as_ref();
    let bytes = build_workbook(program, sheets)?;

    std::fs::write(path, bytes).map_err(|e| {
        ExportError::WriteFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        }
        .into()
    })
}
