use std::fmt;

use crate::{normalize360, wrap180, EARTH_RADIUS_M};

/// A latitude/longitude pair in decimal degrees on the sphere.
///
/// Points are values: every operation returns a new point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        GeoPoint { lat, lon }
    }

    #[inline]
    pub fn lat(self) -> f64 {
        self.lat
    }

    #[inline]
    pub fn lon(self) -> f64 {
        self.lon
    }

    /// The point reached by travelling `distance_m` meters from `self` along
    /// the great circle with initial bearing `bearing_deg`.
    pub fn destination_point(self, distance_m: f64, bearing_deg: f64) -> GeoPoint {
        let delta = distance_m / EARTH_RADIUS_M;
        let theta = bearing_deg.to_radians();

        let phi1 = self.lat.to_radians();
        let lambda1 = self.lon.to_radians();

        let sin_phi2 = phi1.sin() * delta.cos() + phi1.cos() * delta.sin() * theta.cos();
        let phi2 = sin_phi2.asin();
        let y = theta.sin() * delta.sin() * phi1.cos();
        let x = delta.cos() - phi1.sin() * sin_phi2;
        let lambda2 = lambda1 + y.atan2(x);

        GeoPoint::new(phi2.to_degrees(), wrap180(lambda2.to_degrees()))
    }

    /// Bearing in `[0, 360)` at `self` on the great circle toward `other`.
    ///
    /// `None` when the points coincide and the direction is undefined.
    pub fn initial_bearing_to(self, other: GeoPoint) -> Option<f64> {
        if self == other {
            return None;
        }
        let phi1 = self.lat.to_radians();
        let phi2 = other.lat.to_radians();
        let d_lambda = (other.lon - self.lon).to_radians();

        let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * d_lambda.cos();
        let y = d_lambda.sin() * phi2.cos();

        Some(normalize360(y.atan2(x).to_degrees()))
    }

    /// Bearing in `[0, 360)` on arrival at `other`, i.e. the direction of
    /// travel at the far end of the great circle from `self`.
    pub fn final_bearing_to(self, other: GeoPoint) -> Option<f64> {
        other
            .initial_bearing_to(self)
            .map(|back| normalize360(back + 180.0))
    }

    /// Haversine great-circle distance in meters.
    pub fn distance_to(self, other: GeoPoint) -> f64 {
        let phi1 = self.lat.to_radians();
        let phi2 = other.lat.to_radians();
        let d_phi = (other.lat - self.lat).to_radians();
        let d_lambda = (other.lon - self.lon).to_radians();

        let a = (d_phi * 0.5).sin().powi(2)
            + phi1.cos() * phi2.cos() * (d_lambda * 0.5).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.9}, {:.9})", self.lat, self.lon)
    }
}
