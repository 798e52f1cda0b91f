//! Parsed view of directive markers
//!
//! A `Marker` token keeps its bracketed source text verbatim; stages that
//! consume markers parse that text into a `Marker` value at the point of
//! use. The grammar is one line:
//!
//!     "(" command ["," whitespace* count] ")"
//!
//! where `command` is matched case-insensitively against the known command
//! set. Anything else parses to `None`; such markers are still consumed
//! (and deleted) by the pipeline, they just have no effect. A missing,
//! non-numeric or zero count falls back to 1.

use once_cell::sync::Lazy;
use regex::Regex;

/// Shape check for marker text: a command made of letters, then anything
/// up to the closing paren (the count portion is parsed separately so a
/// malformed count degrades instead of invalidating the command)
static MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\(([A-Za-z]+)([^)]*)\)$").expect("marker grammar regex"));

/// The directive a marker carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerCommand {
    /// Uppercase the first letter, lowercase the rest
    Cap,
    /// Uppercase the whole word
    Up,
    /// Lowercase the whole word
    Low,
    /// Reinterpret the preceding word as base 16
    Hex,
    /// Reinterpret the preceding word as base 2
    Bin,
}

/// A parsed marker: its command plus the repeat count
///
/// The count is only meaningful for the case commands; numeric-base
/// commands carry it but ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub command: MarkerCommand,
    pub count: usize,
}

impl Marker {
    /// Parse a marker token's verbatim text, `None` if the command is not
    /// one of the recognized set
    pub fn parse(text: &str) -> Option<Marker> {
        let captures = MARKER_RE.captures(text)?;

        let command = match captures[1].to_ascii_lowercase().as_str() {
            "cap" => MarkerCommand::Cap,
            "up" => MarkerCommand::Up,
            "low" => MarkerCommand::Low,
            "hex" => MarkerCommand::Hex,
            "bin" => MarkerCommand::Bin,
            _ => return None,
        };

        let count = captures[2]
            .trim_start()
            .strip_prefix(',')
            .and_then(|rest| rest.trim().parse::<usize>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(1);

        Some(Marker { command, count })
    }
}
