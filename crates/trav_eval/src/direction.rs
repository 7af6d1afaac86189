use std::fmt;

use trav_geodesy::normalize360;

use crate::errors::{EvalError, EvalResult};
use crate::Value;

/// The `Direction` field of a line or curve, written `TRUE` or `FALSE`.
///
/// On a line, `Forward` walks along the bearing and `Reverse` against it.
/// On a curve, `Forward` turns clockwise (center on the right) and
/// `Reverse` counter-clockwise.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    /// `TRUE` or `FALSE`, in any case.
    pub fn parse(text: &str) -> EvalResult<Self> {
        let text = text.trim();
        if text.eq_ignore_ascii_case("TRUE") {
            Ok(Direction::Forward)
        } else if text.eq_ignore_ascii_case("FALSE") {
            Ok(Direction::Reverse)
        } else {
            Err(EvalError::UnknownDirection(text.to_string()))
        }
    }

    pub fn from_value(value: &Value) -> EvalResult<Self> {
        match value {
            Value::Text(text) => Direction::parse(text),
            other => Err(EvalError::UnknownDirection(other.to_string())),
        }
    }

    /// Azimuth actually walked by a line on `bearing`.
    pub fn line_azimuth(self, bearing: f64) -> f64 {
        match self {
            Direction::Forward => normalize360(bearing),
            Direction::Reverse => normalize360(bearing + 180.0),
        }
    }

    /// Offset from the incoming tangent to the curve center when the record
    /// does not give one.
    pub fn center_turn(self) -> f64 {
        match self {
            Direction::Forward => 90.0,
            Direction::Reverse => -90.0,
        }
    }

    /// Rotate the center-outward radial so it points at the curve's end.
    pub fn sweep(self, radial: f64, delta: f64) -> f64 {
        match self {
            Direction::Forward => normalize360(radial - (180.0 - delta)),
            Direction::Reverse => normalize360(radial + (180.0 - delta)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => write!(f, "TRUE"),
            Direction::Reverse => write!(f, "FALSE"),
        }
    }
}
