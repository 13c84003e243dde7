//! Memoized flight costs.

use std::collections::HashMap;

use crate::airports::{AirportCatalog, AirportCode};
use crate::error::{Error, Result};
use crate::geo::{CostConfig, GeoPoint};

/// Source of direct-flight costs consulted by the search.
///
/// Implementations must return the same non-negative value for both
/// directions of a pair.
pub trait EdgeCost {
    fn get_cost(&mut self, origin: &AirportCode, destination: &AirportCode) -> Result<f64>;
}

/// Cache of direct-flight costs keyed by the unordered pair of airports.
///
/// The cache borrows the catalog it reads coordinates from and never evicts
/// entries; the airport set is static for the lifetime of a search session.
#[derive(Debug)]
pub struct CostCache<'a> {
    airports: &'a AirportCatalog,
    config: CostConfig,
    entries: HashMap<(AirportCode, AirportCode), f64>,
    hits: u64,
    misses: u64,
}

impl<'a> CostCache<'a> {
    /// Create a cache priced at the default per-kilometre rate.
    pub fn new(airports: &'a AirportCatalog) -> Self {
        Self::with_config(airports, CostConfig::default())
    }

    pub fn with_config(airports: &'a AirportCatalog, config: CostConfig) -> Self {
        Self {
            airports,
            config,
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    pub fn config(&self) -> CostConfig {
        self.config
    }

    /// Cost of a direct flight between `origin` and `destination`.
    ///
    /// Both directions share one entry. Fails only when either airport is
    /// missing from the catalog.
    pub fn get_cost(&mut self, origin: &AirportCode, destination: &AirportCode) -> Result<f64> {
        let key = if origin <= destination {
            (origin.clone(), destination.clone())
        } else {
            (destination.clone(), origin.clone())
        };

        if let Some(cost) = self.entries.get(&key) {
            self.hits += 1;
            return Ok(*cost);
        }

        let from = self.location_of(&key.0)?;
        let to = self.location_of(&key.1)?;
        let cost = self.config.cost(from, to);

        self.misses += 1;
        self.entries.insert(key, cost);
        Ok(cost)
    }

    fn location_of(&self, code: &AirportCode) -> Result<GeoPoint> {
        self.airports
            .get(code.as_str())
            .map(|airport| airport.location())
            .ok_or_else(|| Error::UnknownAirport {
                code: code.to_string(),
                suggestions: Vec::new(),
            })
    }

    /// Number of cached airport pairs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

impl EdgeCost for CostCache<'_> {
    fn get_cost(&mut self, origin: &AirportCode, destination: &AirportCode) -> Result<f64> {
        CostCache::get_cost(self, origin, destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airports::Airport;
    use crate::geo::haversine_km;

    fn catalog() -> AirportCatalog {
        [
            ("VLC", 39.49, -0.48),
            ("PDX", 45.59, -122.60),
            ("MAD", 40.47, -3.56),
        ]
        .into_iter()
        .map(|(code, latitude, longitude)| Airport {
            code: AirportCode::new(code),
            name: format!("{code} Airport"),
            country: "Test".to_string(),
            latitude,
            longitude,
        })
        .collect()
    }

    #[test]
    fn both_directions_share_one_entry() {
        let airports = catalog();
        let mut cache = CostCache::new(&airports);
        let vlc = AirportCode::new("VLC");
        let pdx = AirportCode::new("PDX");

        let forward = cache.get_cost(&vlc, &pdx).expect("known airports");
        let backward = cache.get_cost(&pdx, &vlc).expect("known airports");

        assert_eq!(forward, backward);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.misses(), 1);
        assert_eq!(cache.hits(), 1);
    }

    #[test]
    fn cost_is_distance_times_rate() {
        let airports = catalog();
        let config = CostConfig::new(2.0).expect("valid rate");
        let mut cache = CostCache::with_config(&airports, config);
        let vlc = AirportCode::new("VLC");
        let mad = AirportCode::new("MAD");

        let cost = cache.get_cost(&vlc, &mad).expect("known airports");
        let vlc_point = airports.get("VLC").unwrap().location();
        let mad_point = airports.get("MAD").unwrap().location();
        assert!((cost - haversine_km(vlc_point, mad_point) * 2.0).abs() < 1e-9);
    }

    #[test]
    fn same_airport_costs_zero() {
        let airports = catalog();
        let mut cache = CostCache::new(&airports);
        let vlc = AirportCode::new("VLC");
        assert_eq!(cache.get_cost(&vlc, &vlc).expect("known airport"), 0.0);
    }

    #[test]
    fn unknown_airport_is_reported() {
        let airports = catalog();
        let mut cache = CostCache::new(&airports);
        let err = cache
            .get_cost(&AirportCode::new("VLC"), &AirportCode::new("XXX"))
            .unwrap_err();
        assert!(matches!(err, Error::UnknownAirport { ref code, .. } if code == "XXX"));
        assert!(cache.is_empty());
    }
}
