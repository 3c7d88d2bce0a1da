//! Ties parsing, rule evaluation, and formatting together for one query.

use chrono::{Datelike, NaiveDateTime, Weekday};
use serde::Serialize;

use crate::datetime::parse_datetime;
use crate::error::Result;
use crate::output;
use crate::plate::LicensePlate;
use crate::rule_set::{EmptyPolicy, RuleSet};

/// The outcome of a successful prediction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prediction {
    pub plate: String,
    pub last_digit: u8,
    pub at: NaiveDateTime,
    pub weekday: Weekday,
    pub restricted: bool,
}

/// Answers restriction queries against a borrowed [`RuleSet`].
///
/// The predictor holds no state of its own; any number of predictors can
/// share one rule set.
#[derive(Debug, Clone, Copy)]
pub struct Predictor<'a> {
    rules: &'a RuleSet,
}

impl<'a> Predictor<'a> {
    pub fn new(rules: &'a RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'a RuleSet {
        self.rules
    }

    /// Parse the raw inputs and evaluate them.
    ///
    /// The plate is validated first, then the date/time; the first failure is
    /// returned.
    ///
    /// # Errors
    /// - `InvalidLicensePlateFormat` for a malformed plate.
    /// - `InvalidDateTimeFormat` for a malformed date or time.
    /// - `NoRulesDefined` if the rule set is empty.
    pub fn predict(&self, plate: &str, date: &str, time: &str) -> Result<Prediction> {
        let plate = LicensePlate::parse(plate)?;
        let at = parse_datetime(date, time)?;
        let last_digit = plate.last_digit();
        let restricted = self
            .rules
            .is_vehicle_restricted(at, last_digit, EmptyPolicy::Raise)?;

        Ok(Prediction {
            plate: plate.as_str().to_string(),
            last_digit,
            at,
            weekday: at.weekday(),
            restricted,
        })
    }

    /// Like [`predict`](Self::predict), rendered as a user-facing line.
    /// Failures come back as `"Error: <message>"`.
    pub fn predict_restriction(&self, plate: &str, date: &str, time: &str) -> String {
        output::render(&self.predict(plate, date, time))
    }
}
