/*!
 * Tests for line-pattern parsing of meet program text
 */

use heatsheet::program_parser::ProgramParser;
use crate::common;

/// Test section-state carry-over across lane lines
#[test]
fn test_parse_withEventAndHeatHeaders_shouldCarryContextToLaneLines() {
    let lines = [
        "Event 3 200 Freestyle",
        "Heat 1",
        "4 Jane Doe ABC 2:15.33",
        "5 John Roe XYZ 2:14.90",
    ];

    let program = ProgramParser::new().parse(lines);

    assert_eq!(program.heats.len(), 2);
    for entry in &program.heats {
        assert_eq!(entry.event_number, 3);
        assert_eq!(entry.event_name, "200 Freestyle");
        assert_eq!(entry.heat_number, 1);
    }
    assert_eq!(program.heats[0].lane_number, 4);
    assert_eq!(program.heats[0].swimmer_name, "Jane Doe");
    assert_eq!(program.heats[1].lane_number, 5);
    assert_eq!(program.heats[1].swimmer_name, "John Roe");
}

/// Test that record order equals line order
#[test]
fn test_parse_withSampleProgram_shouldPreserveDocumentOrder() {
    let program = ProgramParser::new().parse(common::sample_program_text().lines());

    let lanes: Vec<u32> = program.heats.iter().map(|e| e.lane_number).collect();
    assert_eq!(lanes, vec![4, 5, 3, 6]);

    let alternates: Vec<&str> = program
        .alternates
        .iter()
        .map(|e| e.swimmer_name.as_str())
        .collect();
    assert_eq!(alternates, vec!["Brown, Ava", "White, Zoe"]);
}

/// Test idempotence of parsing
#[test]
fn test_parse_withSameInputTwice_shouldYieldEqualResults() {
    let parser = ProgramParser::new();
    let first = parser.parse(common::sample_program_text().lines());
    let second = parser.parse(common::sample_program_text().lines());

    assert_eq!(first, second);
}

/// Test that unrecognizable input never fails
#[test]
fn test_parse_withOnlyProse_shouldReturnEmptyProgram() {
    let lines = [
        "The quick brown fox jumps over the lazy dog.",
        "Lorem ipsum dolor sit amet, consectetur adipiscing elit.",
        "   ",
        "!!! ??? ###",
    ];

    let program = ProgramParser::new().parse(lines);

    assert!(program.is_empty());
    assert!(program.heats.is_empty());
    assert!(program.alternates.is_empty());
}

/// Test that alternates never land in the heats table
#[test]
fn test_parse_withAlternatesSection_shouldIsolateAlternates() {
    let lines = [
        "Event 7 50 Butterfly",
        "Heat 1",
        "4 Jane Doe ABC 28.01",
        "Alternates",
        "1 Ada Lovelace DEF 28.50",
        "2 Grace Hopper GHI 28.77",
    ];

    let program = ProgramParser::new().parse(lines);

    assert_eq!(program.heats.len(), 1);
    assert_eq!(program.alternates.len(), 2);
    assert_eq!(program.alternates[0].swimmer_name, "Ada Lovelace");
    assert_eq!(program.alternates[0].team, "DEF");
    assert_eq!(program.alternates[0].seed_time, "28.50");
    assert_eq!(program.alternates[0].event_number, 7);
    assert_eq!(program.alternates[0].event_name, "50 Butterfly");
}

/// Test that a heat header ends an alternates section
#[test]
fn test_parse_withHeatAfterAlternates_shouldResumeHeatsTable() {
    let lines = [
        "Event 7 50 Butterfly",
        "Heat 1",
        "Alternates",
        "1 Ada Lovelace DEF 28.50",
        "Heat 2",
        "3 Jane Doe ABC 28.01",
    ];

    let program = ProgramParser::new().parse(lines);

    assert_eq!(program.alternates.len(), 1);
    assert_eq!(program.heats.len(), 1);
    assert_eq!(program.heats[0].heat_number, 2);
    assert_eq!(program.heats[0].lane_number, 3);
}

/// Test that a new event header ends an alternates section
#[test]
fn test_parse_withEventAfterAlternates_shouldResetSectionState() {
    let lines = [
        "Event 7 50 Butterfly",
        "Heat 1",
        "Alternates",
        "Event 8 100 Breaststroke",
        "Heat 1",
        "5 Jane Doe ABC",
    ];

    let program = ProgramParser::new().parse(lines);

    assert!(program.alternates.is_empty());
    assert_eq!(program.heats.len(), 1);
    assert_eq!(program.heats[0].event_number, 8);
    assert_eq!(program.heats[0].event_name, "100 Breaststroke");
}

/// Test missing seed time becomes the empty string
#[test]
fn test_parse_withMissingSeedTime_shouldUseEmptyString() {
    let lines = ["Event 1 50 Freestyle", "Heat 1", "2 Jane Doe ABC"];

    let program = ProgramParser::new().parse(lines);

    assert_eq!(program.heats.len(), 1);
    assert_eq!(program.heats[0].seed_time, "");
    assert_eq!(program.heats[0].team, "ABC");
}

/// Test "NT" is kept as an opaque seed time
#[test]
fn test_parse_withNoTimeMarker_shouldKeepLiteralString() {
    let lines = ["Event 1 50 Freestyle", "Heat 1", "2 Jane Doe ABC NT"];

    let program = ProgramParser::new().parse(lines);

    assert_eq!(program.heats[0].seed_time, "NT");
}

/// Test an age token separating name and team
#[test]
fn test_parse_withAgeToken_shouldSplitNameAndTeam() {
    let lines = [
        "Event 1 50 Freestyle",
        "Heat 1",
        "6 Shumack, Heidi 16 Sopac Swim Club 26.25",
    ];

    let program = ProgramParser::new().parse(lines);

    assert_eq!(program.heats[0].swimmer_name, "Shumack, Heidi");
    assert_eq!(program.heats[0].team, "Sopac Swim Club");
    assert_eq!(program.heats[0].seed_time, "26.25");
}

/// Test lane lines before any header are dropped
#[test]
fn test_parse_withEntryBeforeHeaders_shouldDropRecord() {
    let lines = [
        "4 Jane Doe ABC 2:15.33",
        "Event 1 50 Freestyle",
        "3 John Roe XYZ 25.00",
        "Heat 1",
        "5 Ada Lovelace DEF 24.80",
    ];

    let program = ProgramParser::new().parse(lines);

    // The first line has no event/heat context, the second no heat context.
    assert_eq!(program.heats.len(), 1);
    assert_eq!(program.heats[0].lane_number, 5);
}

/// Test heat header variants used by real programs
#[test]
fn test_parse_withHeatHeaderVariants_shouldExtractHeatNumber() {
    let lines = [
        "Event 2 100 Backstroke",
        "Heat 1 of 3",
        "4 Jane Doe ABC",
        "Final 2a Super Final",
        "5 John Roe XYZ",
    ];

    let program = ProgramParser::new().parse(lines);

    assert_eq!(program.heats.len(), 2);
    assert_eq!(program.heats[0].heat_number, 1);
    assert_eq!(program.heats[1].heat_number, 2);
}

/// Test column-header boilerplate never produces records
#[test]
fn test_parse_withBoilerplateLines_shouldSkipThem() {
    let lines = [
        "Event 1 50 Freestyle",
        "Heat 1",
        "Lane Name Age Team Seed Time",
        "Finals Program",
        "2024-01 Session One",
        "4 Jane Doe ABC",
    ];

    let program = ProgramParser::new().parse(lines);

    assert_eq!(program.heats.len(), 1);
    assert_eq!(program.heats[0].swimmer_name, "Jane Doe");
}

/// Test the optional cap on heats per event
#[test]
fn test_parse_withHeatCap_shouldDropLanesBeyondCap() {
    let lines = [
        "Event 1 50 Freestyle",
        "Heat 1",
        "4 Jane Doe ABC",
        "Heat 2",
        "5 John Roe XYZ",
        "Event 2 100 Freestyle",
        "Heat 1",
        "6 Ada Lovelace DEF",
    ];

    let program = ProgramParser::with_heat_cap(Some(1)).parse(lines);

    // Heat 2 of event 1 exceeds the cap; the counter resets per event.
    assert_eq!(program.heats.len(), 2);
    assert_eq!(program.heats[0].swimmer_name, "Jane Doe");
    assert_eq!(program.heats[1].swimmer_name, "Ada Lovelace");
}

/// Test whitespace tolerance in headers and entries
#[test]
fn test_parse_withVariableWhitespace_shouldNormalizeFields() {
    let lines = [
        "  Event   3    200   Freestyle  ",
        "  Heat   1  ",
        "  4    Jane    Doe    ABC    2:15.33  ",
    ];

    let program = ProgramParser::new().parse(lines);

    assert_eq!(program.heats.len(), 1);
    assert_eq!(program.heats[0].event_name, "200 Freestyle");
    assert_eq!(program.heats[0].swimmer_name, "Jane Doe");
    assert_eq!(program.heats[0].team, "ABC");
    assert_eq!(program.heats[0].seed_time, "2:15.33");
}

/// Test display formatting of entries and the program summary
#[test]
fn test_display_withParsedEntry_shouldDescribeRecord() {
    let lines = [
        "Event 3 200 Freestyle",
        "Heat 1",
        "4 Jane Doe ABC 2:15.33",
    ];

    let program = ProgramParser::new().parse(lines);

    assert_eq!(
        program.heats[0].to_string(),
        "Event 3 (200 Freestyle) Heat 1 Lane 4: Jane Doe [ABC] 2:15.33"
    );

    let summary = program.to_string();
    assert!(summary.contains("Heat entries: 1"));
    assert!(summary.contains("Alternates: 0"));
}
