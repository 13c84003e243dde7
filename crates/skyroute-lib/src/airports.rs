//! Airport catalog loading and lookup.
//!
//! The airport table is a headerless, comma-delimited file where each row
//! carries the airport name at column 1, the country at column 3, the IATA
//! code at column 4 and the latitude/longitude at columns 6 and 7.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::geo::GeoPoint;

const NAME_COLUMN: usize = 1;
const COUNTRY_COLUMN: usize = 3;
const CODE_COLUMN: usize = 4;
const LATITUDE_COLUMN: usize = 6;
const LONGITUDE_COLUMN: usize = 7;

/// Placeholder used by the source table for airports without an IATA code.
const MISSING_CODE: &str = "\\N";

/// Minimum Jaro-Winkler similarity for a fuzzy suggestion.
const FUZZY_THRESHOLD: f64 = 0.75;

/// Canonical node identity: the airport's IATA code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AirportCode(String);

impl AirportCode {
    /// Wrap a code, trimming whitespace and upper-casing it.
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl Borrow<str> for AirportCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AirportCode {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Immutable airport record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Airport {
    pub code: AirportCode,
    pub name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Airport {
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// Lookup table from airport code to the full airport record.
#[derive(Debug, Clone, Default)]
pub struct AirportCatalog {
    airports: HashMap<AirportCode, Airport>,
}

impl AirportCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the catalog from a CSV file on disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::DatasetNotFound {
                path: path.to_path_buf(),
            });
        }
        let file = fs::File::open(path)?;
        let catalog = Self::from_reader(file)?;
        info!(
            airports = catalog.len(),
            "loaded airport catalog from {}",
            path.display()
        );
        Ok(catalog)
    }

    /// Load the catalog from any reader yielding the airport table.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut catalog = Self::new();
        let mut skipped = 0usize;

        for (index, result) in csv_reader.records().enumerate() {
            let record = result?;
            let line = record
                .position()
                .map(|pos| pos.line())
                .unwrap_or(index as u64 + 1);

            match parse_airport(&record, line)? {
                Some(airport) => catalog.insert(airport),
                None => {
                    skipped += 1;
                    debug!(line, "skipping airport row without an IATA code");
                }
            }
        }

        if skipped > 0 {
            debug!(skipped, "airport rows without codes were ignored");
        }

        Ok(catalog)
    }

    /// Insert an airport, replacing any earlier record with the same code.
    pub fn insert(&mut self, airport: Airport) {
        if let Some(previous) = self.airports.insert(airport.code.clone(), airport) {
            debug!(code = %previous.code, "duplicate airport code replaced by later row");
        }
    }

    pub fn get(&self, code: &str) -> Option<&Airport> {
        self.airports.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.airports.contains_key(code)
    }

    /// Resolve a user-supplied code, normalizing case and whitespace.
    pub fn resolve(&self, code: &str) -> Result<&Airport> {
        let normalized = AirportCode::new(code);
        self.get(normalized.as_str())
            .ok_or_else(|| Error::UnknownAirport {
                code: normalized.to_string(),
                suggestions: self.fuzzy_matches(code, 3),
            })
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Airport> {
        self.airports.values()
    }

    /// Best matching airport codes for `query`, comparing against both the
    /// code and the airport name.
    pub fn fuzzy_matches(&self, query: &str, limit: usize) -> Vec<String> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() || limit == 0 {
            return Vec::new();
        }

        let mut scored: Vec<(f64, &AirportCode)> = self
            .airports
            .values()
            .map(|airport| {
                let code_score =
                    strsim::jaro_winkler(&needle, &airport.code.as_str().to_lowercase());
                let name_score = strsim::jaro_winkler(&needle, &airport.name.to_lowercase());
                (code_score.max(name_score), &airport.code)
            })
            .filter(|(score, _)| *score >= FUZZY_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, code)| code.to_string())
            .collect()
    }
}

impl FromIterator<Airport> for AirportCatalog {
    fn from_iter<I: IntoIterator<Item = Airport>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for airport in iter {
            catalog.insert(airport);
        }
        catalog
    }
}

fn parse_airport(record: &StringRecord, line: u64) -> Result<Option<Airport>> {
    let field = |column: usize| {
        record.get(column).ok_or_else(|| Error::InvalidRecord {
            table: "airport",
            line,
            reason: format!("expected at least {} columns, found {}", column + 1, record.len()),
        })
    };

    let code = field(CODE_COLUMN)?.trim();
    if code.is_empty() || code == MISSING_CODE {
        return Ok(None);
    }

    let coordinate = |column: usize, label: &str| -> Result<f64> {
        let raw = field(column)?;
        raw.trim().parse::<f64>().map_err(|err| Error::InvalidRecord {
            table: "airport",
            line,
            reason: format!("{label} '{raw}' is not a number: {err}"),
        })
    };

    Ok(Some(Airport {
        code: AirportCode::new(code),
        name: field(NAME_COLUMN)?.to_string(),
        country: field(COUNTRY_COLUMN)?.to_string(),
        latitude: coordinate(LATITUDE_COLUMN, "latitude")?,
        longitude: coordinate(LONGITUDE_COLUMN, "longitude")?,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
1,\"Valencia Airport\",\"Valencia\",\"Spain\",\"VLC\",\"LEVC\",39.4893,-0.481625,240,1,\"E\"
2,\"Portland International Airport\",\"Portland\",\"United States\",\"PDX\",\"KPDX\",45.58869934,-122.5979996,31,-8,\"A\"
3,\"Unnamed Strip\",\"Nowhere\",\"Chile\",\\N,\"SCXX\",-30.0,-70.0,0,-4,\"S\"
";

    #[test]
    fn loads_rows_by_column_position() {
        let catalog = AirportCatalog::from_reader(SAMPLE.as_bytes()).expect("parse sample");

        assert_eq!(catalog.len(), 2);
        let vlc = catalog.get("VLC").expect("VLC present");
        assert_eq!(vlc.name, "Valencia Airport");
        assert_eq!(vlc.country, "Spain");
        assert!((vlc.latitude - 39.4893).abs() < 1e-9);
        assert!((vlc.longitude + 0.481625).abs() < 1e-9);
    }

    #[test]
    fn rows_without_codes_are_skipped() {
        let catalog = AirportCatalog::from_reader(SAMPLE.as_bytes()).expect("parse sample");
        assert!(catalog.iter().all(|airport| airport.country != "Chile"));
    }

    #[test]
    fn last_duplicate_wins() {
        let data = "\
1,\"Old Name\",\"X\",\"Spain\",\"VLC\",\"LEVC\",1.0,2.0
2,\"New Name\",\"X\",\"Spain\",\"VLC\",\"LEVC\",3.0,4.0
";
        let catalog = AirportCatalog::from_reader(data.as_bytes()).expect("parse");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("VLC").map(|a| a.name.as_str()), Some("New Name"));
    }

    #[test]
    fn short_rows_are_rejected_with_line_number() {
        let data = "1,\"Short\",\"X\",\"Spain\",\"AAA\"\n";
        let err = AirportCatalog::from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidRecord {
                table: "airport",
                line: 1,
                ..
            }
        ));
    }

    #[test]
    fn bad_coordinates_are_rejected() {
        let data = "1,\"Bad\",\"X\",\"Spain\",\"BAD\",\"LEXX\",north,2.0\n";
        let err = AirportCatalog::from_reader(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("latitude 'north'"));
    }

    #[test]
    fn resolve_normalizes_case_and_suggests_alternatives() {
        let catalog = AirportCatalog::from_reader(SAMPLE.as_bytes()).expect("parse sample");
        assert_eq!(catalog.resolve(" pdx ").map(|a| a.code.as_str()).ok(), Some("PDX"));

        match catalog.resolve("PDY") {
            Err(Error::UnknownAirport { code, suggestions }) => {
                assert_eq!(code, "PDY");
                assert_eq!(suggestions.first().map(String::as_str), Some("PDX"));
            }
            other => panic!("expected unknown airport, got {other:?}"),
        }
    }

    #[test]
    fn fuzzy_matches_consider_names() {
        let catalog = AirportCatalog::from_reader(SAMPLE.as_bytes()).expect("parse sample");
        let matches = catalog.fuzzy_matches("portland", 3);
        assert_eq!(matches, vec!["PDX".to_string()]);
    }
}
