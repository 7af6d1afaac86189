//! Circular curve construction.
//!
//! A curve leaves the current point tangent to the incoming leg (the great
//! circle from the previous point). Its center sits `radius` feet off the
//! tangent, turned by `turn_for_center`; the end point is found by swinging
//! the radial from the center through the delta angle.
//!
//! ```text
//!            end
//!           .
//!         .   \ radius
//!  start .------* center
//!        ^
//!        | incoming tangent
//!     previous
//! ```

use std::f64::consts::PI;

use trav_geodesy::{feet_to_meters, normalize360, GeoPoint};

use crate::errors::{EvalError, EvalResult};
use crate::Direction;

/// Central angle in degrees of an arc `length` long on a circle of `radius`.
///
/// Both arguments must be in the same unit.
#[inline]
pub fn delta_from_length(length: f64, radius: f64) -> f64 {
    length * 360.0 / (radius * 2.0 * PI)
}

/// Fully resolved curve parameters, in feet and degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Curve {
    pub length_ft: f64,
    pub radius_ft: f64,
    pub direction: Direction,
    /// Overrides the delta derived from length and radius.
    pub delta: Option<f64>,
    /// Overrides the `±90°` turn derived from `direction`.
    pub turn_for_center: Option<f64>,
}

impl Curve {
    pub fn new(length_ft: f64, radius_ft: f64, direction: Direction) -> Self {
        Curve {
            length_ft,
            radius_ft,
            direction,
            delta: None,
            turn_for_center: None,
        }
    }

    #[must_use]
    pub fn with_delta(mut self, delta: f64) -> Self {
        self.delta = Some(delta);
        self
    }

    #[must_use]
    pub fn with_turn_for_center(mut self, turn: f64) -> Self {
        self.turn_for_center = Some(turn);
        self
    }

    pub fn delta(&self) -> f64 {
        self.delta
            .unwrap_or_else(|| delta_from_length(self.length_ft, self.radius_ft))
    }

    pub fn turn(&self) -> f64 {
        self.turn_for_center
            .unwrap_or_else(|| self.direction.center_turn())
    }
}

/// Where a curve ends, and the circle it lies on.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ResolvedArc {
    pub center: GeoPoint,
    pub end: GeoPoint,
    /// Central angle actually swept, in degrees.
    pub delta: f64,
    /// Azimuth from the start point to the center.
    pub center_bearing: f64,
}

/// Construct the curve leaving `start` whose incoming tangent runs from
/// `previous`.
pub fn resolve_arc(previous: GeoPoint, start: GeoPoint, curve: &Curve) -> EvalResult<ResolvedArc> {
    if !(curve.radius_ft.is_finite() && curve.radius_ft > 0.0) {
        return Err(EvalError::InvalidRadius(curve.radius_ft));
    }
    let tangent = previous
        .final_bearing_to(start)
        .ok_or(EvalError::DegenerateTangent)?;

    let radius_m = feet_to_meters(curve.radius_ft);
    let delta = curve.delta();
    let center_bearing = normalize360(tangent + curve.turn());
    let center = start.destination_point(radius_m, center_bearing);

    let radial = start
        .final_bearing_to(center)
        .ok_or(EvalError::DegenerateTangent)?;
    let end = center.destination_point(radius_m, curve.direction.sweep(radial, delta));

    tracing::trace!(
        tangent,
        delta,
        center_bearing,
        %center,
        %end,
        "resolved curve"
    );

    Ok(ResolvedArc {
        center,
        end,
        delta,
        center_bearing,
    })
}
