//! Well-known-text output for traverse results.
//!
//! Coordinates are written `lon lat`, separated by `,` with no space, using
//! the shortest decimal form that round-trips. A [`Feature`] wraps a
//! geometry in the quoted three-column row GIS tools import as CSV:
//!
//! ```text
//! "LINESTRING (-121.8 37.4,-121.79965 37.4)", "south line", "from the monument"
//! ```

use std::fmt;

use trav_diagnostic::{Diagnostic, ErrorCode, ToDiagnostic};
use trav_geodesy::GeoPoint;

/// A polygon was requested from too few points.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("a polygon needs at least 3 distinct points, found {distinct}")]
pub struct PolygonError {
    pub distinct: usize,
}

impl PolygonError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::E4001
    }
}

impl ToDiagnostic for PolygonError {
    fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_note("omit --polygon to emit a line string")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Point(GeoPoint),
    LineString(Vec<GeoPoint>),
    /// A closed ring: the last point equals the first.
    Polygon(Vec<GeoPoint>),
}

impl Geometry {
    pub fn point(p: GeoPoint) -> Self {
        Geometry::Point(p)
    }

    /// Renders as `LINESTRING EMPTY` when `points` is empty.
    pub fn line_string(points: &[GeoPoint]) -> Self {
        Geometry::LineString(points.to_vec())
    }

    /// Close the ring if needed.
    pub fn polygon(points: &[GeoPoint]) -> Result<Self, PolygonError> {
        let distinct = count_distinct(points);
        if distinct < 3 {
            return Err(PolygonError { distinct });
        }
        let mut ring = points.to_vec();
        if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
            if first != last {
                ring.push(first);
            }
        }
        Ok(Geometry::Polygon(ring))
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Geometry::Point(p) => {
                write!(f, "POINT (")?;
                write_coord(f, *p)?;
                write!(f, ")")
            }
            Geometry::LineString(points) if points.is_empty() => write!(f, "LINESTRING EMPTY"),
            Geometry::LineString(points) => {
                write!(f, "LINESTRING (")?;
                write_coords(f, points)?;
                write!(f, ")")
            }
            Geometry::Polygon(ring) => {
                write!(f, "POLYGON ((")?;
                write_coords(f, ring)?;
                write!(f, "))")
            }
        }
    }
}

/// A geometry with a name and description, rendered as one CSV row.
#[derive(Clone, Debug, PartialEq)]
pub struct Feature {
    pub geometry: Geometry,
    pub name: String,
    pub description: String,
}

impl Feature {
    pub fn new(geometry: Geometry, name: impl Into<String>, description: impl Into<String>) -> Self {
        Feature {
            geometry,
            name: name.into(),
            description: description.into(),
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\", \"{}\", \"{}\"",
            self.geometry,
            escape_quotes(&self.name),
            escape_quotes(&self.description)
        )
    }
}

fn write_coord(f: &mut fmt::Formatter<'_>, p: GeoPoint) -> fmt::Result {
    write!(f, "{} {}", p.lon(), p.lat())
}

fn write_coords(f: &mut fmt::Formatter<'_>, points: &[GeoPoint]) -> fmt::Result {
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            write!(f, ",")?;
        }
        write_coord(f, *p)?;
    }
    Ok(())
}

fn escape_quotes(text: &str) -> String {
    text.replace('"', "\"\"")
}

fn count_distinct(points: &[GeoPoint]) -> usize {
    let mut seen: Vec<GeoPoint> = Vec::with_capacity(points.len());
    for p in points {
        if !seen.contains(p) {
            seen.push(*p);
        }
    }
    seen.len()
}
