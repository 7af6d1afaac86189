//! Spherical geodesy primitives for traverse reconstruction.
//!
//! All computation happens on a sphere of mean Earth radius. Angles are
//! decimal degrees; distances handed to [`GeoPoint::destination_point`] are
//! meters. Survey input is in feet, so callers convert with
//! [`feet_to_meters`] first.
//!
//! The sphere is an approximation: at survey scale (a few kilometers) the
//! difference from an ellipsoidal datum is well under the precision of the
//! recorded calls.

mod point;

pub use point::GeoPoint;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Exact length of the international foot in meters.
pub const METERS_PER_FOOT: f64 = 0.3048;

/// Convert survey feet to meters.
#[inline]
pub fn feet_to_meters(feet: f64) -> f64 {
    feet * METERS_PER_FOOT
}

/// Normalize an angle to `[0, 360)`.
///
/// `rem_euclid` can round tiny negative inputs up to exactly `360.0`, which
/// is folded back to `0.0`.
#[inline]
pub fn normalize360(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Normalize an angle to `(-180, 180]`. Used for longitudes.
#[inline]
pub fn wrap180(degrees: f64) -> f64 {
    if -180.0 < degrees && degrees <= 180.0 {
        return degrees;
    }
    let wrapped = normalize360(degrees + 180.0) - 180.0;
    if wrapped <= -180.0 {
        180.0
    } else {
        wrapped
    }
}
