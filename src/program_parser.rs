use std::fmt;
use regex::Regex;
use once_cell::sync::Lazy;
use log::debug;

// @module: Line-pattern parsing of meet program text

// @const: Event header regex ("Event 3  200 Freestyle")
static EVENT_HEADER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^Event\s+(\d+)\s+(.+)$").unwrap()
});

// @const: Heat header regex ("Heat 1", "Heat 2 of 5", "Final 1a Super Final")
static HEAT_HEADER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:Heat|Final)\s+(\d+)[a-z]?\b").unwrap()
});

// @const: Alternates section header regex
static ALTERNATES_HEADER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^Alternates\b").unwrap()
});

// @const: Entry line regex - lane/rank number followed by the swimmer fields
static ENTRY_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,2})\s+(\S.*)$").unwrap()
});

// @const: Seed time token ("NT", "26.25", "2:15.33")
static SEED_TIME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:NT|\d{1,2}:\d{2}\.\d{2}|\d{1,3}\.\d{2})$").unwrap()
});

// @const: Standalone age token separating name from team
static AGE_TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{1,2}$").unwrap()
});

// @const: Session code lines ("2024-01 ...") emitted as page furniture
static SESSION_CODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}\b").unwrap()
});

// @struct: One lane assignment within one heat of one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeatEntry {
    // @field: Event number
    pub event_number: u32,

    // @field: Event name as printed in the program
    pub event_name: String,

    // @field: Heat number
    pub heat_number: u32,

    // @field: Lane number
    pub lane_number: u32,

    // @field: Swimmer name
    pub swimmer_name: String,

    // @field: Team name, empty when the line carried none
    pub team: String,

    // @field: Seed time as an opaque string, empty when absent
    pub seed_time: String,
}

impl HeatEntry {
    /// Creates a new heat entry
    pub fn new(
        event_number: u32,
        event_name: String,
        heat_number: u32,
        lane_number: u32,
        swimmer_name: String,
        team: String,
        seed_time: String,
    ) -> Self {
        HeatEntry {
            event_number,
            event_name,
            heat_number,
            lane_number,
            swimmer_name,
            team,
            seed_time,
        }
    }
}

impl fmt::Display for HeatEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Event {} ({}) Heat {} Lane {}: {} [{}] {}",
            self.event_number,
            self.event_name,
            self.heat_number,
            self.lane_number,
            self.swimmer_name,
            self.team,
            self.seed_time
        )
    }
}

// @struct: A swimmer held in reserve for an event, not assigned a lane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternateEntry {
    // @field: Event number
    pub event_number: u32,

    // @field: Event name as printed in the program
    pub event_name: String,

    // @field: Swimmer name
    pub swimmer_name: String,

    // @field: Team name, empty when the line carried none
    pub team: String,

    // @field: Seed time as an opaque string, empty when absent
    pub seed_time: String,
}

impl AlternateEntry {
    /// Creates a new alternate entry
    pub fn new(
        event_number: u32,
        event_name: String,
        swimmer_name: String,
        team: String,
        seed_time: String,
    ) -> Self {
        AlternateEntry {
            event_number,
            event_name,
            swimmer_name,
            team,
            seed_time,
        }
    }
}

/// Parsed contents of one meet program, in document order
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MeetProgram {
    /// Lane assignments, one per recognized lane line
    pub heats: Vec<HeatEntry>,

    /// Alternates, one per recognized line inside an alternates section
    pub alternates: Vec<AlternateEntry>,
}

impl MeetProgram {
    /// Create an empty program
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no record of either kind was recognized
    pub fn is_empty(&self) -> bool {
        self.heats.is_empty() && self.alternates.is_empty()
    }
}

impl fmt::Display for MeetProgram {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Meet Program")?;
        writeln!(f, "Heat entries: {}", self.heats.len())?;
        writeln!(f, "Alternates: {}", self.alternates.len())?;
        Ok(())
    }
}

/// How a single line was classified, checked in fixed priority order
#[derive(Debug, PartialEq, Eq)]
enum LineClass {
    /// "Event N <name>" - starts a new event, resets heat and section state
    EventHeader { number: u32, name: String },

    /// "Heat N" / "Final N" - starts a new heat, ends any alternates section
    HeatHeader { number: u32 },

    /// "Alternates ..." - subsequent entries go to the alternates table
    AlternatesHeader,

    /// "<lane> <name> [<age>] <team> [<seed>]" - one record
    Entry {
        lane: u32,
        name: String,
        team: String,
        seed: String,
    },

    /// Column headers and page furniture the program repeats on every page
    Boilerplate,

    /// Anything else - dropped silently, this is the only failure policy
    Unrecognized,
}

// @struct: Running parse state threaded through the line scan
#[derive(Debug, Default)]
struct ParserContext {
    // @field: Current event number, None before the first event header
    event_number: Option<u32>,

    // @field: Current event name
    event_name: String,

    // @field: Current heat number, None before the first heat header
    heat_number: Option<u32>,

    // @field: Whether we are inside an alternates section
    in_alternates: bool,

    // @field: Heat headers seen for the current event (for the optional cap)
    heats_seen: u32,
}

/// Parser for meet program text lines
///
/// Performs a single forward pass over the lines, maintaining the current
/// event/heat/section context and emitting a record per recognized entry line.
/// Lines that match no pattern are skipped; there is no parse failure, a
/// document with nothing recognizable yields an empty [`MeetProgram`].
#[derive(Debug, Default)]
pub struct ProgramParser {
    /// Optional cap on heats kept per event, guards against malformed programs
    max_heats_per_event: Option<u32>,
}

impl ProgramParser {
    /// Create a parser with no heat cap
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with an optional cap on heats per event
    pub fn with_heat_cap(max_heats_per_event: Option<u32>) -> Self {
        ProgramParser { max_heats_per_event }
    }

    /// Parse an ordered sequence of lines into a [`MeetProgram`]
    ///
    /// Repeated calls over the same lines produce field-for-field equal
    /// results; record order equals line order.
    pub fn parse<I, S>(&self, lines: I) -> MeetProgram
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut program = MeetProgram::new();
        let mut ctx = ParserContext::default();

        for line in lines {
            let line = line.as_ref().trim();
            if line.is_empty() {
                continue;
            }

            match classify_line(line) {
                LineClass::EventHeader { number, name } => {
                    ctx = ParserContext {
                        event_number: Some(number),
                        event_name: name,
                        heat_number: None,
                        in_alternates: false,
                        heats_seen: 0,
                    };
                }
                LineClass::HeatHeader { number } => {
                    ctx.in_alternates = false;
                    if ctx.event_number.is_none() {
                        debug!("Skipping heat header before any event header: {}", line);
                        continue;
                    }
                    ctx.heats_seen += 1;
                    let over_cap = self
                        .max_heats_per_event
                        .is_some_and(|cap| ctx.heats_seen > cap);
                    if over_cap {
                        debug!(
                            "Heat cap reached for event {:?}, dropping heat {}",
                            ctx.event_number, number
                        );
                        ctx.heat_number = None;
                    } else {
                        ctx.heat_number = Some(number);
                    }
                }
                LineClass::AlternatesHeader => {
                    ctx.in_alternates = true;
                }
                LineClass::Entry { lane, name, team, seed } => {
                    if ctx.in_alternates {
                        // The leading number on an alternate line is a rank,
                        // not a lane; it is not part of the record.
                        let _ = lane;
                        match ctx.event_number {
                            Some(event_number) => {
                                program.alternates.push(AlternateEntry::new(
                                    event_number,
                                    ctx.event_name.clone(),
                                    name,
                                    team,
                                    seed,
                                ));
                            }
                            None => {
                                debug!("Skipping alternate line without event context: {}", line);
                            }
                        }
                    } else {
                        match (ctx.event_number, ctx.heat_number) {
                            (Some(event_number), Some(heat_number)) => {
                                program.heats.push(HeatEntry::new(
                                    event_number,
                                    ctx.event_name.clone(),
                                    heat_number,
                                    lane,
                                    name,
                                    team,
                                    seed,
                                ));
                            }
                            _ => {
                                debug!("Skipping lane line without event/heat context: {}", line);
                            }
                        }
                    }
                }
                LineClass::Boilerplate | LineClass::Unrecognized => {}
            }
        }

        program
    }
}

/// Classify a trimmed, non-empty line
///
/// Patterns are checked in the fixed priority order event header, heat
/// header, alternates header, boilerplate, entry; the first match wins.
fn classify_line(line: &str) -> LineClass {
    if let Some(caps) = EVENT_HEADER_REGEX.captures(line) {
        if let Ok(number) = caps[1].parse::<u32>() {
            let name = caps[2].split_whitespace().collect::<Vec<_>>().join(" ");
            return LineClass::EventHeader { number, name };
        }
    }

    if let Some(caps) = HEAT_HEADER_REGEX.captures(line) {
        if let Ok(number) = caps[1].parse::<u32>() {
            return LineClass::HeatHeader { number };
        }
    }

    if ALTERNATES_HEADER_REGEX.is_match(line) {
        return LineClass::AlternatesHeader;
    }

    if is_boilerplate(line) {
        return LineClass::Boilerplate;
    }

    if let Some(caps) = ENTRY_LINE_REGEX.captures(line) {
        if let Ok(lane) = caps[1].parse::<u32>() {
            if let Some((name, team, seed)) = split_entry_fields(&caps[2]) {
                return LineClass::Entry { lane, name, team, seed };
            }
        }
    }

    LineClass::Unrecognized
}

/// Column headers and page furniture repeated throughout a program
fn is_boilerplate(line: &str) -> bool {
    let low = line.to_lowercase();
    low.starts_with("lane ")
        || low.starts_with("name ")
        || low.starts_with("age ")
        || low.starts_with("team ")
        || low.starts_with("finals program")
        || SESSION_CODE_REGEX.is_match(line)
}

/// Split the remainder of an entry line into (name, team, seed time)
///
/// A trailing seed-time token is optional and becomes the empty string when
/// absent. A standalone 1-2 digit age token, when present, separates the name
/// tokens from the team tokens; otherwise the final token is taken as the
/// team. A line with no name tokens is not an entry.
fn split_entry_fields(rest: &str) -> Option<(String, String, String)> {
    let mut tokens: Vec<&str> = rest.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }

    let seed = if SEED_TIME_REGEX.is_match(tokens[tokens.len() - 1]) {
        tokens.pop().map(str::to_string).unwrap_or_default()
    } else {
        String::new()
    };

    if let Some(idx) = tokens.iter().position(|t| AGE_TOKEN_REGEX.is_match(t)) {
        let name = tokens[..idx].join(" ");
        if name.is_empty() {
            return None;
        }
        let team = tokens[idx + 1..].join(" ");
        return Some((name, team, seed));
    }

    match tokens.len() {
        0 => None,
        1 => Some((tokens[0].to_string(), String::new(), seed)),
        _ => {
            let team = tokens.pop().map(str::to_string).unwrap_or_default();
            Some((tokens.join(" "), team, seed))
        }
    }
}
