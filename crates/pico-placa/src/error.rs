//! Error types for pico-placa operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PicoPlacaError {
    /// The plate did not match `^[A-Z]{3}-[0-9]{3,4}$`.
    #[error("Invalid license plate format: '{0}'. Expected format: 'XXX-###' or 'XXX-####'")]
    InvalidLicensePlateFormat(String),

    /// The joined `"<date> <time>"` string did not parse.
    #[error("Unable to parse '{0}'. Expected format: 'YYYY-MM-DD HH:MM'")]
    InvalidDateTimeFormat(String),

    /// Evaluation was requested against an empty rule set.
    #[error("No Pico y Placa rules are defined in the ruleset.")]
    NoRulesDefined,

    #[error("Invalid rule: {0}")]
    InvalidRule(String),

    #[error("Rule table parse error: {0}")]
    RuleTable(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PicoPlacaError>;
