//! A single restriction rule: which weekdays, which plate digits, and which
//! time-of-day window.
//!
//! Windows are half-open: a vehicle is restricted from `start` up to but not
//! including `end`. A rule running 06:00-09:30 restricts 09:29 and releases
//! at 09:30.

use chrono::{Duration, NaiveTime, Weekday};

use crate::error::{PicoPlacaError, Result};

/// A time-of-day window `[start, end)` within a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start: NaiveTime,
    end: NaiveTime,
}

impl TimeWindow {
    /// Build a window from its bounds.
    ///
    /// # Errors
    /// Returns `PicoPlacaError::InvalidRule` if `start > end`. Windows that
    /// wrap past midnight are not supported.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self> {
        if start > end {
            return Err(PicoPlacaError::InvalidRule(format!(
                "window start {} is after end {}",
                start.format("%H:%M"),
                end.format("%H:%M")
            )));
        }
        Ok(Self { start, end })
    }

    /// Convenience constructor from hour/minute pairs.
    ///
    /// # Errors
    /// Returns `PicoPlacaError::InvalidRule` for an out-of-range hour or
    /// minute, or when the start is after the end.
    pub fn from_hm(start: (u32, u32), end: (u32, u32)) -> Result<Self> {
        let start = hm(start.0, start.1)?;
        let end = hm(end.0, end.1)?;
        Self::new(start, end)
    }

    /// Window from minutes past midnight, for tables known to be valid.
    /// Out-of-range minutes wrap around the day.
    pub(crate) fn from_minutes(start: u32, end: u32) -> Self {
        let midnight = NaiveTime::default();
        Self {
            start: midnight + Duration::minutes(i64::from(start)),
            end: midnight + Duration::minutes(i64::from(end)),
        }
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// `start <= time < end`.
    pub fn contains(&self, time: NaiveTime) -> bool {
        self.start <= time && time < self.end
    }
}

fn hm(hour: u32, minute: u32) -> Result<NaiveTime> {
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| {
        PicoPlacaError::InvalidRule(format!("{:02}:{:02} is not a valid time", hour, minute))
    })
}

/// An immutable restriction rule.
///
/// Construct with [`Rule::new`]; a `Rule` value always has at least one day,
/// at least one digit, and a well-ordered window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    days: Vec<Weekday>,
    digits: Vec<u8>,
    window: TimeWindow,
}

impl Rule {
    /// Create a rule active on `days`, restricting plates ending in `digits`
    /// during `window`. Duplicate days and digits collapse.
    ///
    /// # Errors
    /// Returns `PicoPlacaError::InvalidRule` if `days` or `digits` is empty,
    /// or if any digit is above 9.
    pub fn new(
        days: impl IntoIterator<Item = Weekday>,
        digits: impl IntoIterator<Item = u8>,
        window: TimeWindow,
    ) -> Result<Self> {
        let mut days: Vec<Weekday> = days.into_iter().collect();
        days.sort_by_key(|d| d.num_days_from_monday());
        days.dedup();

        let mut digits: Vec<u8> = digits.into_iter().collect();
        digits.sort_unstable();
        digits.dedup();

        if days.is_empty() {
            return Err(PicoPlacaError::InvalidRule(
                "a rule needs at least one day".to_string(),
            ));
        }
        if digits.is_empty() {
            return Err(PicoPlacaError::InvalidRule(
                "a rule needs at least one digit".to_string(),
            ));
        }
        if let Some(bad) = digits.iter().find(|d| **d > 9) {
            return Err(PicoPlacaError::InvalidRule(format!(
                "{} is not a plate digit (0-9)",
                bad
            )));
        }

        Ok(Self {
            days,
            digits,
            window,
        })
    }

    /// Build a rule from a single day and digit pair that are known to be
    /// valid (a built-in table).
    pub(crate) fn for_day(day: Weekday, digits: [u8; 2], window: TimeWindow) -> Self {
        let mut digits = digits.to_vec();
        digits.sort_unstable();
        digits.dedup();
        Self {
            days: vec![day],
            digits,
            window,
        }
    }

    /// Days the rule is active on, Monday first.
    pub fn days(&self) -> &[Weekday] {
        &self.days
    }

    /// Restricted plate digits, ascending.
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn window(&self) -> TimeWindow {
        self.window
    }

    /// True iff `weekday` is one of the rule's days, `digit` is one of its
    /// digits, and `time` falls inside its window.
    pub fn is_restricted(&self, weekday: Weekday, time: NaiveTime, digit: u8) -> bool {
        self.days.contains(&weekday) && self.digits.contains(&digit) && self.window.contains(time)
    }
}
