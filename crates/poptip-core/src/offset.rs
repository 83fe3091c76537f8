#![forbid(unsafe_code)]

//! Offset and padding values at the configuration boundary.
//!
//! Callers hand paddings and adjustments to the geometry layer either as
//! plain pixel numbers or as percentage strings (`"5%"` of a viewport
//! extent). Resolution must fail fast: a NaN or infinity that slips through
//! here propagates into every downstream coordinate and corrupts the whole
//! layout silently.

use std::fmt;
use std::str::FromStr;

/// An offset supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Offset {
    /// Absolute pixels.
    Px(f32),
    /// Percentage of a total extent.
    Percent(f32),
}

impl Offset {
    /// Resolve to pixels against a total extent.
    pub fn resolve(self, total: f32) -> Result<f32, OffsetError> {
        let px = match self {
            Self::Px(v) => v,
            Self::Percent(p) => total * p / 100.0,
        };
        if px.is_finite() {
            Ok(px)
        } else {
            Err(OffsetError::NonFinite {
                value: format!("{self:?}"),
            })
        }
    }
}

impl FromStr for Offset {
    type Err = OffsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let malformed = || OffsetError::Malformed {
            value: s.to_string(),
        };

        let (number, percent) = match trimmed.strip_suffix('%') {
            Some(body) => (body, true),
            None => (trimmed, false),
        };
        let parsed: f32 = number.trim().parse().map_err(|_| malformed())?;
        if !parsed.is_finite() {
            return Err(OffsetError::NonFinite {
                value: s.to_string(),
            });
        }
        Ok(if percent {
            Self::Percent(parsed)
        } else {
            Self::Px(parsed)
        })
    }
}

/// Parse an offset string and resolve it against a total extent.
pub fn parse_offset(value: &str, total: f32) -> Result<f32, OffsetError> {
    value.parse::<Offset>()?.resolve(total)
}

/// Rejection of an offset value at the configuration boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OffsetError {
    /// The value is not a number or percentage string.
    Malformed { value: String },
    /// The value parses but is not a finite number.
    NonFinite { value: String },
}

impl fmt::Display for OffsetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed { value } => {
                write!(f, "offset {value:?} is not a number or percentage")
            }
            Self::NonFinite { value } => {
                write!(f, "offset {value:?} does not resolve to a finite number")
            }
        }
    }
}

impl std::error::Error for OffsetError {}
