//! Runtime values produced by evaluating records.

use std::fmt;

use trav_bearing::{parse_angle, parse_bearing};
use trav_geodesy::{normalize360, GeoPoint};

use crate::errors::{EvalError, EvalResult};

/// The result of one record.
///
/// Operands read from the file arrive as `Text`; coercion to a number, an
/// azimuth, or an angle happens where the value is used.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
    Point(GeoPoint),
    /// A function ran for its effect and returned nothing.
    Void,
}

impl Value {
    pub fn text(text: impl Into<String>) -> Self {
        Value::Text(text.into())
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Text(_) => "text",
            Value::Point(_) => "point",
            Value::Void => "void",
        }
    }

    #[inline]
    pub fn is_void(&self) -> bool {
        matches!(self, Value::Void)
    }

    pub fn as_point(&self) -> Option<GeoPoint> {
        match self {
            Value::Point(p) => Some(*p),
            _ => None,
        }
    }

    /// A finite decimal number. Text must parse completely.
    pub fn to_number(&self) -> EvalResult<f64> {
        let number = match self {
            Value::Number(n) => Some(*n),
            Value::Text(s) => s.trim().parse::<f64>().ok(),
            Value::Point(_) | Value::Void => None,
        };
        number
            .filter(|n| n.is_finite())
            .ok_or_else(|| self.mismatch("a number"))
    }

    /// An azimuth in `[0, 360)`. Numbers are taken as degrees; text is parsed
    /// as a bearing.
    pub fn to_azimuth(&self) -> EvalResult<f64> {
        match self {
            Value::Number(n) if n.is_finite() => Ok(normalize360(*n)),
            Value::Text(s) => Ok(parse_bearing(s)?),
            _ => Err(self.mismatch("a bearing")),
        }
    }

    /// An angle in decimal degrees. Text may be a decimal number or a
    /// degrees-minutes-seconds angle.
    pub fn to_angle(&self) -> EvalResult<f64> {
        match self {
            Value::Text(s) => match s.trim().parse::<f64>() {
                Ok(n) if n.is_finite() => Ok(n),
                _ => Ok(parse_angle(s)?),
            },
            _ => self.to_number(),
        }
    }

    pub fn to_point(&self) -> EvalResult<GeoPoint> {
        self.as_point().ok_or_else(|| self.mismatch("a point"))
    }

    fn mismatch(&self, expected: &'static str) -> EvalError {
        let found = match self {
            Value::Text(s) => format!("text '{s}'"),
            Value::Number(n) => format!("number {n}"),
            other => other.type_name().to_string(),
        };
        EvalError::type_mismatch(expected, found)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Point(p) => write!(f, "{p}"),
            Value::Void => write!(f, "void"),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<GeoPoint> for Value {
    fn from(p: GeoPoint) -> Self {
        Value::Point(p)
    }
}
