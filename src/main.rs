// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::app_controller::Controller;
use crate::file_utils::FileManager;

mod app_config;
mod app_controller;
mod errors;
mod file_utils;
mod pdf_text;
mod program_parser;
mod tabular;
mod workbook;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

fn level_filter(level: app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a meet program PDF into a heats workbook (default command)
    Convert(ConvertArgs),

    /// Generate shell completions for heatsheet
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Input meet program PDF; omit to pick one from the working directory
    #[arg(value_name = "INPUT_PDF")]
    input_path: Option<PathBuf>,

    /// Output workbook path; defaults to the input with an .xlsx extension
    #[arg(value_name = "OUTPUT_XLSX")]
    output_path: Option<PathBuf>,

    /// Also write heats/alternates CSV files beside the workbook
    #[arg(long)]
    csv: bool,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// heatsheet - Swim Meet Program to Heats Workbook
///
/// Extracts event/heat/lane data from a meet program PDF and writes a
/// two-sheet workbook (heats + alternates), with optional CSV exports.
#[derive(Parser, Debug)]
#[command(name = "heatsheet")]
#[command(version = "1.0.0")]
#[command(about = "Swim meet program PDF to heats workbook converter")]
#[command(long_about = "heatsheet extracts event/heat/lane data from a swim meet program PDF and
writes a two-sheet xlsx workbook plus optional CSV files.

EXAMPLES:
    heatsheet program.pdf heats.xlsx        # Convert with explicit paths
    heatsheet program.pdf heats.xlsx --csv  # Also write heats/alternates CSVs
    heatsheet                               # Pick a PDF from the current directory
    heatsheet -f program.pdf heats.xlsx     # Overwrite an existing workbook
    heatsheet --log-level debug program.pdf out.xlsx
    heatsheet completions bash > heatsheet.bash

CONFIGURATION:
    Configuration is read from conf.json when it exists (sheet names, heat
    cap, log level); defaults are used otherwise. You can point at another
    file with --config.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input meet program PDF; omit to pick one from the working directory
    #[arg(value_name = "INPUT_PDF")]
    input_path: Option<PathBuf>,

    /// Output workbook path; defaults to the input with an .xlsx extension
    #[arg(value_name = "OUTPUT_XLSX")]
    output_path: Option<PathBuf>,

    /// Also write heats/alternates CSV files beside the workbook
    #[arg(long)]
    csv: bool,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "heatsheet", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Convert(args)) => run_convert(args),
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let convert_args = ConvertArgs {
                input_path: cli.input_path,
                output_path: cli.output_path,
                csv: cli.csv,
                force_overwrite: cli.force_overwrite,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_convert(convert_args)
        }
    }
}

fn run_convert(options: ConvertArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        log::set_max_level(level_filter(cmd_log_level.clone().into()));
    }

    // Load configuration when the file exists, defaults otherwise
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        Config::from_file(config_path)?
    } else {
        Config::default()
    };

    // Update log level in config if specified via command line
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    } else {
        // If log level was not set via command line, apply it from config now
        log::set_max_level(level_filter(config.log_level.clone()));
    }

    // Create controller; this validates the configuration
    let controller = Controller::with_config(config)
        .context("Configuration validation failed")?;

    // Resolve the input document, interactively if none was given
    let input_path = match options.input_path {
        Some(path) => path,
        None => {
            let pdfs = FileManager::discover_pdfs(".")?;
            let selected = prompt_user_to_select_pdf(&pdfs)?;
            info!("Selected: {:?}", selected);
            selected
        }
    };

    // Resolve the output path
    let output_path = options
        .output_path
        .unwrap_or_else(|| FileManager::default_output_path(&input_path));

    controller.run(&input_path, &output_path, options.force_overwrite, options.csv)
}

/// Ask the user which PDF to convert
///
/// A sole candidate is selected automatically; otherwise the candidates are
/// listed and a 1-based selection is read from stdin and validated by
/// [`FileManager::select_pdf`].
fn prompt_user_to_select_pdf(pdfs: &[PathBuf]) -> Result<PathBuf> {
    if pdfs.is_empty() {
        warn!("Tip: run heatsheet from a folder containing PDFs, or provide paths explicitly:");
        warn!("  heatsheet /path/to/program.pdf /path/to/output.xlsx");
        return FileManager::select_pdf(pdfs, "");
    }

    if pdfs.len() == 1 {
        return Ok(pdfs[0].clone());
    }

    println!("Found PDFs:");
    for (i, pdf) in pdfs.iter().enumerate() {
        println!(
            "  {}) {}",
            i + 1,
            pdf.file_name().unwrap_or_default().to_string_lossy()
        );
    }

    print!("Select PDF [1-{}]: ", pdfs.len());
    std::io::stdout().flush()?;

    let mut choice = String::new();
    std::io::stdin()
        .read_line(&mut choice)
        .context("Failed to read selection")?;

    FileManager::select_pdf(pdfs, &choice)
}
