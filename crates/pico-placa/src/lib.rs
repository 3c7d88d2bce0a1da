//! # pico-placa
//!
//! Decides whether a vehicle may circulate under a peak-and-plate
//! ("Pico y Placa") policy, given its license plate, a date, and a time.
//!
//! ## Quick start
//!
//! ```rust
//! use pico_placa::{policy, Predictor};
//!
//! let rules = policy::quito_default();
//! let predictor = Predictor::new(&rules);
//!
//! // 2023-10-02 is a Monday; plates ending in 1 are restricted in the morning.
//! let prediction = predictor.predict("ABC-121", "2023-10-02", "08:00").unwrap();
//! assert!(prediction.restricted);
//!
//! assert_eq!(
//!     predictor.predict_restriction("ABC-121", "2023-10-02", "10:00"),
//!     "Vehicle is not restricted to circulate at this time and date"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`rule`] — a single restriction rule and its `[start, end)` window
//! - [`rule_set`] — weekday-indexed rule collection and evaluation
//! - [`predictor`] — raw strings in, typed [`Prediction`] out
//! - [`plate`] — license-plate validation
//! - [`datetime`] — date/time input parsing
//! - [`output`] — user-facing message rendering
//! - [`policy`] — the built-in Quito table and JSON rule tables
//! - [`error`] — Error types

pub mod datetime;
pub mod error;
pub mod output;
pub mod plate;
pub mod policy;
pub mod predictor;
pub mod rule;
pub mod rule_set;

pub use datetime::parse_datetime;
pub use error::PicoPlacaError;
pub use plate::{parse_license_plate, LicensePlate};
pub use predictor::{Prediction, Predictor};
pub use rule::{Rule, TimeWindow};
pub use rule_set::{EmptyPolicy, RuleSet};
