use anyhow::{anyhow, Result};
use log::{debug, info, warn};
use std::path::Path;

use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::pdf_text;
use crate::program_parser::{MeetProgram, ProgramParser};
use crate::tabular;
use crate::workbook::{self, SheetNames};

// @module: Application controller for program conversion

/// Main application controller for heat sheet extraction
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Sheet names from the active configuration
    fn sheet_names(&self) -> SheetNames {
        SheetNames {
            heats: self.config.heats_sheet_name.clone(),
            alternates: self.config.alternates_sheet_name.clone(),
        }
    }

    /// Parse an already-extracted sequence of lines into a program
    ///
    /// Exposed separately from [`Controller::run`] so callers holding text
    /// (tests, in-memory uploads) can reuse the configured parser.
    pub fn parse_lines<I, S>(&self, lines: I) -> MeetProgram
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ProgramParser::with_heat_cap(self.config.max_heats_per_event).parse(lines)
    }

    /// Run the main workflow: extract, parse, export
    ///
    /// Writes the workbook to `output_path` and, when `write_csv` is set, the
    /// heats/alternates CSVs beside it. Refuses to replace an existing
    /// workbook unless `force_overwrite` is set.
    pub fn run<P1: AsRef<Path>, P2: AsRef<Path>>(
        &self,
        input_file: P1,
        output_path: P2,
        force_overwrite: bool,
        write_csv: bool,
    ) -> Result<()> {
        let input_file = input_file.as_ref();
        let output_path = output_path.as_ref();
        let start_time = std::time::Instant::now();

        // Check if the input file exists
        if !FileManager::file_exists(input_file) {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        // Check if the output already exists
        if output_path.exists() && !force_overwrite {
            warn!(
                "Skipping file, output already exists (use -f to force overwrite): {:?}",
                output_path
            );
            return Ok(());
        }

        // Ensure the output directory exists
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                FileManager::ensure_dir(parent)?;
            }
        }

        info!("Extracting text from: {:?}", input_file);
        let lines = pdf_text::extract_lines(input_file)?;

        let program = self.parse_lines(&lines);
        if program.is_empty() {
            // Not an error: the workbook and CSVs will contain headers only.
            warn!("No heats or alternates recognized in {:?}", input_file);
        } else {
            debug!(
                "Recognized {} heat entries and {} alternates",
                program.heats.len(),
                program.alternates.len()
            );
        }

        self.export(&program, output_path, write_csv)?;

        info!(
            "Saved {:?} ({} heats, {} alternates) in {:.2}s",
            output_path,
            program.heats.len(),
            program.alternates.len(),
            start_time.elapsed().as_secs_f64()
        );

        Ok(())
    }

    /// Export a parsed program: workbook always, CSVs on request
    pub fn export<P: AsRef<Path>>(
        &self,
        program: &MeetProgram,
        output_path: P,
        write_csv: bool,
    ) -> Result<()> {
        let output_path = output_path.as_ref();

        workbook::write_workbook(program, &self.sheet_names(), output_path)?;

        if write_csv {
            let heats_path = FileManager::csv_sibling_path(output_path, "heats");
            let alternates_path = FileManager::csv_sibling_path(output_path, "alternates");
            tabular::write_heats_csv(program, &heats_path)?;
            tabular::write_alternates_csv(program, &alternates_path)?;
            debug!("Wrote {:?} and {:?}", heats_path, alternates_path);
        }

        Ok(())
    }
}
