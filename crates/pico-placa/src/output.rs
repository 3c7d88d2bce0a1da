//! Human-readable rendering of predictions.
//!
//! This is the only place results become text; everything upstream deals in
//! [`Prediction`] values and [`PicoPlacaError`](crate::PicoPlacaError)s.

use crate::error::Result;
use crate::predictor::Prediction;

pub const RESTRICTED_MESSAGE: &str = "Vehicle is restricted to circulate at this time and date";
pub const NOT_RESTRICTED_MESSAGE: &str =
    "Vehicle is not restricted to circulate at this time and date";

/// Prefix placed before any error message.
pub const ERROR_PREFIX: &str = "Error: ";

pub fn format_prediction(is_restricted: bool) -> &'static str {
    if is_restricted {
        RESTRICTED_MESSAGE
    } else {
        NOT_RESTRICTED_MESSAGE
    }
}

/// Render a prediction outcome as a single line of user-facing text.
///
/// ```
/// use pico_placa::{output, PicoPlacaError};
///
/// let line = output::render(&Err(PicoPlacaError::NoRulesDefined));
/// assert_eq!(line, "Error: No Pico y Placa rules are defined in the ruleset.");
/// ```
pub fn render(outcome: &Result<Prediction>) -> String {
    match outcome {
        Ok(prediction) => format_prediction(prediction.restricted).to_string(),
        Err(err) => format!("{}{}", ERROR_PREFIX, err),
    }
}
