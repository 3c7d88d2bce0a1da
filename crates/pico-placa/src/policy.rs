//! Rule tables: the built-in Quito policy and JSON-configured tables.
//!
//! A JSON rule table looks like:
//!
//! ```json
//! {
//!   "rules": [
//!     {
//!       "days": ["Mon"],
//!       "digits": [1, 2],
//!       "windows": [
//!         { "start": "06:00", "end": "09:30" },
//!         { "start": "16:00", "end": "20:00" }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! Each entry expands into one [`Rule`] per window.

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{PicoPlacaError, Result};
use crate::rule::{Rule, TimeWindow};
use crate::rule_set::RuleSet;

/// IANA zone the built-in policy is defined in (Quito).
pub const DEFAULT_TIMEZONE: &str = "America/Guayaquil";

const QUITO_DIGITS: [(Weekday, [u8; 2]); 5] = [
    (Weekday::Mon, [1, 2]),
    (Weekday::Tue, [3, 4]),
    (Weekday::Wed, [5, 6]),
    (Weekday::Thu, [7, 8]),
    (Weekday::Fri, [9, 0]),
];

/// Restricted windows as minutes past midnight: 06:00-09:30, 16:00-20:00.
const QUITO_WINDOWS: [(u32, u32); 2] = [(6 * 60, 9 * 60 + 30), (16 * 60, 20 * 60)];

/// Build the standard Quito table: one digit pair per weekday, restricted
/// 06:00-09:30 and 16:00-20:00. Weekends are unrestricted.
pub fn quito_default() -> RuleSet {
    let mut rules = RuleSet::new();
    for (day, digits) in QUITO_DIGITS {
        for (start, end) in QUITO_WINDOWS {
            rules.add_rule(Rule::for_day(day, digits, TimeWindow::from_minutes(start, end)));
        }
    }
    rules
}

/// A window as written in a rule table, `HH:MM` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowEntry {
    pub start: String,
    pub end: String,
}

/// One rule-table entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleEntry {
    /// Weekday names (`"Mon"`, `"monday"`, ...).
    pub days: Vec<String>,
    pub digits: Vec<u8>,
    pub windows: Vec<WindowEntry>,
}

/// A deserialized rule table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTable {
    pub rules: Vec<RuleEntry>,
}

impl RuleTable {
    /// Parse a JSON rule table.
    ///
    /// # Errors
    /// Returns `PicoPlacaError::RuleTable` for malformed JSON or a document
    /// that does not have the rule-table shape.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate every entry and build the indexed rule set.
    ///
    /// # Errors
    /// Returns `PicoPlacaError::InvalidRule` naming the offending entry for an
    /// unknown day name, a bad `HH:MM` string, an entry without windows, or
    /// any rule [`Rule::new`] rejects.
    pub fn into_rule_set(self) -> Result<RuleSet> {
        let mut rules = RuleSet::new();
        for (index, entry) in self.rules.into_iter().enumerate() {
            let expanded = entry_rules(&entry).map_err(|err| match err {
                PicoPlacaError::InvalidRule(msg) => {
                    PicoPlacaError::InvalidRule(format!("entry {}: {}", index, msg))
                }
                other => other,
            })?;
            rules.extend(expanded);
        }
        Ok(rules)
    }
}

fn entry_rules(entry: &RuleEntry) -> Result<Vec<Rule>> {
    let days = entry
        .days
        .iter()
        .map(|name| {
            name.parse::<Weekday>()
                .map_err(|_| PicoPlacaError::InvalidRule(format!("unknown day '{}'", name)))
        })
        .collect::<Result<Vec<_>>>()?;

    if entry.windows.is_empty() {
        return Err(PicoPlacaError::InvalidRule(
            "a rule needs at least one window".to_string(),
        ));
    }

    entry
        .windows
        .iter()
        .map(|w| {
            let window = TimeWindow::new(parse_hm(&w.start)?, parse_hm(&w.end)?)?;
            Rule::new(days.iter().copied(), entry.digits.iter().copied(), window)
        })
        .collect()
}

fn parse_hm(raw: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .map_err(|_| PicoPlacaError::InvalidRule(format!("'{}' is not an HH:MM time", raw)))
}
