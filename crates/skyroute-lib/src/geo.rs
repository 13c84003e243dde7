//! Great-circle geometry and the synthetic per-kilometre flight cost.

use serde::Serialize;

use crate::error::{Error, Result};

/// Mean Earth radius in kilometres (IUGG).
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Default price charged for every kilometre flown.
pub const DEFAULT_RATE_PER_KM: f64 = 0.1;

/// Point on the Earth's surface in decimal degrees.
///
/// Latitude is negative south of the equator and longitude negative west of
/// Greenwich. Ranges are not validated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Haversine distance to `other` in kilometres.
    pub fn distance_km(&self, other: &Self) -> f64 {
        haversine_km(*self, *other)
    }
}

/// Great-circle distance between two points in kilometres.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Pricing parameters for the distance-based cost function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostConfig {
    rate_per_km: f64,
}

impl CostConfig {
    /// Build a config charging `rate_per_km` for every kilometre flown.
    pub fn new(rate_per_km: f64) -> Result<Self> {
        if !rate_per_km.is_finite() || rate_per_km < 0.0 {
            return Err(Error::InvalidRate { rate: rate_per_km });
        }
        Ok(Self { rate_per_km })
    }

    pub fn rate_per_km(&self) -> f64 {
        self.rate_per_km
    }

    /// Cost of a direct flight between two points.
    pub fn cost(&self, a: GeoPoint, b: GeoPoint) -> f64 {
        haversine_km(a, b) * self.rate_per_km
    }
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            rate_per_km: DEFAULT_RATE_PER_KM,
        }
    }
}

/// Cost of a direct flight at the default rate.
pub fn flight_cost(a: GeoPoint, b: GeoPoint) -> f64 {
    CostConfig::default().cost(a, b)
}
