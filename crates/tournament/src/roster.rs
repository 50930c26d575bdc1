//! Free-text roster parsing
//!
//! Participants are entered one per line or separated by commas.

use std::collections::HashSet;
use tracing::warn;

/// Longest accepted player name, in characters
pub const MAX_NAME_LENGTH: usize = 50;

/// Rosters above this size still work but make a very wide crosstable
pub const WARN_AFTER: usize = 32;

/// Limits applied while parsing a roster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterLimits {
    pub max_name_length: usize,
    pub warn_after: usize,
}

impl Default for RosterLimits {
    fn default() -> Self {
        Self {
            max_name_length: MAX_NAME_LENGTH,
            warn_after: WARN_AFTER,
        }
    }
}

/// Outcome of parsing a roster
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRoster {
    /// Accepted names, in entry order
    pub names: Vec<String>,
    /// Repeated names (case-insensitive), as typed
    pub duplicates: Vec<String>,
    /// Names over the length limit
    pub too_long: Vec<String>,
}

impl ParsedRoster {
    /// True when a draw can be made from this roster.
    pub fn is_ready(&self) -> bool {
        self.names.len() >= 2 && self.duplicates.is_empty() && self.too_long.is_empty()
    }
}

pub fn parse_participants(text: &str, limits: RosterLimits) -> ParsedRoster {
    let mut parsed = ParsedRoster::default();
    let mut seen = HashSet::new();

    for name in text
        .split(['\n', ','])
        .map(str::trim)
        .filter(|name| !name.is_empty())
    {
        if name.chars().count() > limits.max_name_length {
            parsed.too_long.push(name.to_string());
            continue;
        }
        if !seen.insert(name.to_lowercase()) {
            parsed.duplicates.push(name.to_string());
            continue;
        }
        parsed.names.push(name.to_string());
    }

    if parsed.names.len() > limits.warn_after {
        warn!(
            players = parsed.names.len(),
            "more than {} participants, the crosstable will be wide", limits.warn_after
        );
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_commas_and_newlines() {
        let parsed = parse_participants("Anna, Boris\n  Clara \n\n,Dmitri,", RosterLimits::default());
        assert_eq!(parsed.names, vec!["Anna", "Boris", "Clara", "Dmitri"]);
        assert!(parsed.is_ready());
    }

    #[test]
    fn test_duplicates_are_case_insensitive() {
        let parsed = parse_participants("Anna\nBoris\nanna", RosterLimits::default());
        assert_eq!(parsed.names, vec!["Anna", "Boris"]);
        assert_eq!(parsed.duplicates, vec!["anna"]);
        assert!(!parsed.is_ready());
    }

    #[test]
    fn test_rejects_long_names() {
        let long = "x".repeat(MAX_NAME_LENGTH + 1);
        let exact = "y".repeat(MAX_NAME_LENGTH);
        let parsed = parse_participants(&format!("{long}\n{exact}\nZoe"), RosterLimits::default());
        assert_eq!(parsed.too_long, vec![long]);
        assert_eq!(parsed.names, vec![exact, "Zoe".to_string()]);
        assert!(!parsed.is_ready());
    }

    #[test]
    fn test_needs_two_players() {
        assert!(!parse_participants("Solo", RosterLimits::default()).is_ready());
        assert!(!parse_participants("  \n , ", RosterLimits::default()).is_ready());
    }
}
