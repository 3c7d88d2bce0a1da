//! Day-indexed collection of restriction rules.
//!
//! Each rule is stored once behind an `Arc` and referenced from the bucket of
//! every weekday it names, so an evaluation only scans the rules for the
//! queried day.

use std::sync::Arc;

use chrono::{Datelike, NaiveDateTime, Weekday};
use tracing::{debug, trace};

use crate::error::{PicoPlacaError, Result};
use crate::rule::Rule;

/// What to do when a rule set with no rules is asked to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyPolicy {
    /// Fail with `PicoPlacaError::NoRulesDefined`.
    #[default]
    Raise,
    /// Treat every vehicle as unrestricted.
    Allow,
}

/// Restriction rules bucketed by weekday (index 0 = Monday).
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    by_day: [Vec<Arc<Rule>>; 7],
    len: usize,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `rule` under every weekday it names.
    ///
    /// No deduplication: adding an equal rule twice doubles the scan work for
    /// its days but never changes an outcome.
    pub fn add_rule(&mut self, rule: Rule) {
        let rule = Arc::new(rule);
        for day in rule.days() {
            self.by_day[day.num_days_from_monday() as usize].push(Arc::clone(&rule));
        }
        self.len += 1;
        debug!(
            days = ?rule.days(),
            digits = ?rule.digits(),
            start = %rule.window().start(),
            end = %rule.window().end(),
            "registered rule"
        );
    }

    /// True iff at least one weekday has a rule.
    pub fn has_rules(&self) -> bool {
        self.by_day.iter().any(|bucket| !bucket.is_empty())
    }

    /// Number of rules added (not bucket entries).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The rules active on `weekday`, in registration order.
    pub fn rules_for(&self, weekday: Weekday) -> impl Iterator<Item = &Rule> {
        self.by_day[weekday.num_days_from_monday() as usize]
            .iter()
            .map(|rule| rule.as_ref())
    }

    /// Decide whether a plate ending in `digit` is restricted at `at`.
    ///
    /// Only the bucket for `at`'s weekday is scanned; the first matching rule
    /// short-circuits.
    ///
    /// # Errors
    /// Returns `PicoPlacaError::NoRulesDefined` if the set is empty and
    /// `on_empty` is [`EmptyPolicy::Raise`].
    pub fn is_vehicle_restricted(
        &self,
        at: NaiveDateTime,
        digit: u8,
        on_empty: EmptyPolicy,
    ) -> Result<bool> {
        if !self.has_rules() {
            return match on_empty {
                EmptyPolicy::Raise => Err(PicoPlacaError::NoRulesDefined),
                EmptyPolicy::Allow => {
                    debug!("no rules defined, vehicle allowed by policy");
                    Ok(false)
                }
            };
        }

        let weekday = at.weekday();
        let time = at.time();
        let restricted = self.rules_for(weekday).any(|rule| {
            let hit = rule.is_restricted(weekday, time, digit);
            if hit {
                trace!(?weekday, %time, digit, window = ?rule.window(), "rule matched");
            }
            hit
        });

        debug!(?weekday, %time, digit, restricted, "evaluated restriction");
        Ok(restricted)
    }
}

impl Extend<Rule> for RuleSet {
    fn extend<I: IntoIterator<Item = Rule>>(&mut self, iter: I) {
        for rule in iter {
            self.add_rule(rule);
        }
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
