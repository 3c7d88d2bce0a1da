//! License-plate parsing.
//!
//! A plate is three uppercase ASCII letters, a hyphen, and three or four
//! ASCII digits (`ABC-123`, `PBX-1234`). Only the final digit matters for
//! restriction purposes.

use std::fmt;
use std::str::FromStr;

use crate::error::{PicoPlacaError, Result};

/// A validated license plate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LicensePlate(String);

impl LicensePlate {
    /// Validate `raw` against the plate grammar.
    ///
    /// # Errors
    /// Returns `PicoPlacaError::InvalidLicensePlateFormat` carrying the raw
    /// input when it does not match.
    pub fn parse(raw: &str) -> Result<Self> {
        if is_well_formed(raw.as_bytes()) {
            Ok(Self(raw.to_string()))
        } else {
            Err(PicoPlacaError::InvalidLicensePlateFormat(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The final digit of the plate, 0-9.
    pub fn last_digit(&self) -> u8 {
        // Validated on construction: the last byte is always an ASCII digit.
        self.0.as_bytes()[self.0.len() - 1] - b'0'
    }
}

fn is_well_formed(bytes: &[u8]) -> bool {
    if !(7..=8).contains(&bytes.len()) {
        return false;
    }
    let (letters, rest) = bytes.split_at(3);
    letters.iter().all(u8::is_ascii_uppercase)
        && rest[0] == b'-'
        && rest[1..].iter().all(u8::is_ascii_digit)
}

impl FromStr for LicensePlate {
    type Err = PicoPlacaError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for LicensePlate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validate `raw` and return its last digit.
///
/// # Errors
/// Returns `PicoPlacaError::InvalidLicensePlateFormat` if the plate is malformed.
pub fn parse_license_plate(raw: &str) -> Result<u8> {
    LicensePlate::parse(raw).map(|plate| plate.last_digit())
}
