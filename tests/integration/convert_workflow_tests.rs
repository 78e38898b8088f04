/*!
 * End-to-end tests for the parse and export workflow
 */

use anyhow::Result;
use heatsheet::app_config::Config;
use heatsheet::app_controller::Controller;
use crate::common;

/// Test the text-to-artifacts pipeline end to end
#[test]
fn test_parse_and_export_withSampleProgram_shouldWriteAllArtifacts() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let output = temp_dir.path().join("meet.xlsx");

    let controller = Controller::new_for_test()?;
    let program = controller.parse_lines(common::sample_program_text().lines());

    assert_eq!(program.heats.len(), 4);
    assert_eq!(program.alternates.len(), 2);

    controller.export(&program, &output, true)?;

    // Workbook
    let workbook_bytes = std::fs::read(&output)?;
    assert_eq!(&workbook_bytes[0..2], b"PK");

    // Heats CSV
    let heats_csv = std::fs::read_to_string(temp_dir.path().join("meet_heats.csv"))?;
    let lines: Vec<&str> = heats_csv.lines().collect();
    assert_eq!(lines[0], "Event #,Event Name,Heat,Lane,Name,Team,Seed Time");
    assert_eq!(lines[1], "3,Girls 200 Freestyle,1,4,Jane Doe,ABC,2:15.33");
    assert_eq!(lines.len(), 5);

    // Alternates CSV
    let alternates_csv =
        std::fs::read_to_string(temp_dir.path().join("meet_alternates.csv"))?;
    assert!(alternates_csv.starts_with("Event #,Event Name,Name,Team,Seed Time\n"));
    assert_eq!(alternates_csv.lines().count(), 3);

    Ok(())
}

/// Test an empty parse still exports header-only artifacts
#[test]
fn test_export_withEmptyProgram_shouldWriteHeaderOnlyArtifacts() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let output = temp_dir.path().join("empty.xlsx");

    let controller = Controller::new_for_test()?;
    let program = controller.parse_lines(["nothing recognizable here"]);
    assert!(program.is_empty());

    controller.export(&program, &output, true)?;

    assert!(output.exists());
    let heats_csv = std::fs::read_to_string(temp_dir.path().join("empty_heats.csv"))?;
    assert_eq!(heats_csv.lines().count(), 1);

    Ok(())
}

/// Test the configured heat cap flows from config into parsing
#[test]
fn test_parse_lines_withConfiguredHeatCap_shouldApplyCap() -> Result<()> {
    let config = Config {
        max_heats_per_event: Some(1),
        ..Config::default()
    };
    let controller = Controller::with_config(config)?;

    let program = controller.parse_lines(common::sample_program_text().lines());

    // Event 3 heat 2 is dropped by the cap; event 4 heat 1 survives.
    assert_eq!(program.heats.len(), 3);
    assert!(program.heats.iter().all(|e| e.heat_number == 1));

    Ok(())
}

/// Test run refuses a missing input and writes nothing
#[test]
fn test_run_withMissingInput_shouldFailWithoutOutput() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let output = temp_dir.path().join("out.xlsx");

    let controller = Controller::new_for_test()?;
    let result = controller.run(temp_dir.path().join("missing.pdf"), &output, false, false);

    assert!(result.is_err());
    assert!(!output.exists());

    Ok(())
}

/// Test run leaves an existing output untouched without the force flag
#[test]
fn test_run_withExistingOutput_shouldSkipWithoutForce() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "program.pdf", "not a real pdf")?;
    let output = common::create_test_file(temp_dir.path(), "out.xlsx", "existing")?;

    let controller = Controller::new_for_test()?;
    controller.run(&input, &output, false, false)?;

    // The existing artifact is preserved byte-for-byte.
    assert_eq!(std::fs::read_to_string(&output)?, "existing");

    Ok(())
}

/// Test an undecodable document fails before any output is produced
#[test]
fn test_run_withGarbageDocument_shouldFailWithoutOutput() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "program.pdf", "not a real pdf")?;
    let output = temp_dir.path().join("out.xlsx");

    let controller = Controller::new_for_test()?;
    let result = controller.run(&input, &output, true, true);

    assert!(result.is_err());
    assert!(!output.exists());
    assert!(!temp_dir.path().join("out_heats.csv").exists());

    Ok(())
}
