//! Angle and bearing parser for survey calls.
//!
//! Two entry points cover every angle a record file can contain:
//!
//! - [`parse_angle`]: degrees-minutes-seconds such as `12°30'15"` (curve deltas)
//! - [`parse_bearing`]: quadrant bearings such as `N45°30'15"E`, or a plain
//!   azimuth such as `180` (line bearings)
//!
//! Both return decimal degrees. The grammar lives entirely in this crate so
//! callers never see how the text is scanned.
//!
//! # Grammar
//!
//! ```text
//! angle    := ws* digits '°'? sep digits{1,2} '\''? sep digits{1,2} '"'? ws*
//! bearing  := ws* ('N' | 'S' | '-')? ws* angle ('E' | 'W')? ws*
//!           | decimal-number
//! ```
//!
//! where `sep` is whitespace unless the preceding symbol was present.
//! Hemisphere letters are case-insensitive.

mod cursor;

use cursor::Cursor;
use trav_diagnostic::{Diagnostic, ErrorCode, ToDiagnostic};
use trav_geodesy::normalize360;

/// An angle or bearing string did not match the grammar.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BearingError {
    #[error("malformed angle '{0}': expected degrees, minutes, and seconds such as 12°30'15\"")]
    MalformedAngle(String),
    #[error("malformed bearing '{0}': expected a quadrant bearing such as N45°30'15\"E or an azimuth in degrees")]
    MalformedBearing(String),
}

impl BearingError {
    pub fn code(&self) -> ErrorCode {
        match self {
            BearingError::MalformedAngle(_) => ErrorCode::E0001,
            BearingError::MalformedBearing(_) => ErrorCode::E0002,
        }
    }
}

impl ToDiagnostic for BearingError {
    fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code()).with_message(self.to_string())
    }
}

/// Degrees, minutes, and seconds as written.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Dms {
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Dms {
    pub fn to_degrees(self) -> f64 {
        f64::from(self.degrees) + f64::from(self.minutes) / 60.0 + f64::from(self.seconds) / 3600.0
    }
}

/// The meridian a quadrant bearing is measured from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Meridian {
    North,
    South,
    /// No letter, or a leading `-`. Measured like `North`.
    Unmarked,
}

/// The side of the meridian a quadrant bearing swings toward.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    East,
    West,
    /// No letter. Swings like `East`.
    Unmarked,
}

/// A bearing as written in a legal description: `N 45°30'15" E`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct QuadrantBearing {
    pub meridian: Meridian,
    pub angle: Dms,
    pub side: Side,
}

impl QuadrantBearing {
    /// Azimuth in degrees clockwise from north, in `[0, 360)`.
    pub fn azimuth(self) -> f64 {
        let angle = self.angle.to_degrees();
        let south = self.meridian == Meridian::South;
        let azimuth = match self.side {
            Side::West if south => angle + 180.0,
            Side::West => 360.0 - angle,
            Side::East | Side::Unmarked if south => 180.0 - angle,
            Side::East | Side::Unmarked => angle,
        };
        normalize360(azimuth)
    }
}

/// Parse a degrees-minutes-seconds angle into decimal degrees.
pub fn parse_angle(text: &str) -> Result<f64, BearingError> {
    let mut cursor = Cursor::new(text);
    let dms = scan_dms(&mut cursor)
        .filter(|_| cursor.is_eof())
        .ok_or_else(|| BearingError::MalformedAngle(text.to_string()))?;
    Ok(dms.to_degrees())
}

/// Parse a quadrant bearing without converting it.
pub fn parse_quadrant(text: &str) -> Result<QuadrantBearing, BearingError> {
    let malformed = || BearingError::MalformedBearing(text.to_string());

    let mut cursor = Cursor::new(text);
    cursor.eat_whitespace();
    let meridian = match cursor.current().to_ascii_uppercase() {
        b'N' => Some(Meridian::North),
        b'S' => Some(Meridian::South),
        b'-' => Some(Meridian::Unmarked),
        _ => None,
    };
    if meridian.is_some() {
        cursor.advance();
    }
    let meridian = meridian.unwrap_or(Meridian::Unmarked);

    let angle = scan_dms(&mut cursor).ok_or_else(malformed)?;

    let side = match cursor.current().to_ascii_uppercase() {
        b'E' => Side::East,
        b'W' => Side::West,
        _ => Side::Unmarked,
    };
    if side != Side::Unmarked {
        cursor.advance();
        cursor.eat_whitespace();
    }

    if !cursor.is_eof() {
        return Err(malformed());
    }
    Ok(QuadrantBearing {
        meridian,
        angle,
        side,
    })
}

/// Parse a bearing into an azimuth in `[0, 360)`.
///
/// Text that is a plain decimal number is already an azimuth in degrees.
pub fn parse_bearing(text: &str) -> Result<f64, BearingError> {
    if let Some(azimuth) = parse_azimuth(text) {
        return Ok(normalize360(azimuth));
    }
    parse_quadrant(text).map(QuadrantBearing::azimuth)
}

/// The reverse direction of a bearing, in `[0, 360)`.
pub fn opposite_bearing(text: &str) -> Result<f64, BearingError> {
    parse_bearing(text).map(|azimuth| normalize360(azimuth + 180.0))
}

fn parse_azimuth(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let numeric = !trimmed.is_empty()
        && trimmed
            .bytes()
            .all(|b| b.is_ascii_digit() || b == b'.' || b == b'-' || b == b'+');
    if !numeric {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Scan `ws* digits '°'? sep digits{1,2} '\''? sep digits{1,2} '"'? ws*`.
fn scan_dms(cursor: &mut Cursor<'_>) -> Option<Dms> {
    cursor.eat_whitespace();
    let degrees = scan_number(cursor, None)?;
    let symbol = cursor.eat_str("°");
    if !cursor.eat_whitespace() && !symbol {
        return None;
    }

    let minutes = scan_number(cursor, Some(2))?;
    let symbol = cursor.eat_str("'");
    if !cursor.eat_whitespace() && !symbol {
        return None;
    }

    let seconds = scan_number(cursor, Some(2))?;
    cursor.eat_str("\"");
    cursor.eat_whitespace();

    Some(Dms {
        degrees,
        minutes,
        seconds,
    })
}

/// Scan a run of ASCII digits, rejecting empty runs and runs longer than
/// `max_digits`.
fn scan_number(cursor: &mut Cursor<'_>, max_digits: Option<usize>) -> Option<u32> {
    let start = cursor.pos();
    let len = cursor.eat_while(|b| b.is_ascii_digit());
    if len == 0 || max_digits.is_some_and(|max| len > max) {
        return None;
    }
    std::str::from_utf8(cursor.slice_from(start))
        .ok()?
        .parse()
        .ok()
}
