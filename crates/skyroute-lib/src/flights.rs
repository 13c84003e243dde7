//! Flight table loading.
//!
//! Rows carry the origin IATA code at column 2, the destination at column 4
//! and the number of stops at column 7. Only direct flights are kept.

use std::fs;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info};

use crate::airports::AirportCode;
use crate::error::{Error, Result};

const ORIGIN_COLUMN: usize = 2;
const DESTINATION_COLUMN: usize = 4;
const STOPS_COLUMN: usize = 7;

/// Direct flight between two airports.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Flight {
    pub origin: AirportCode,
    pub destination: AirportCode,
}

impl Flight {
    pub fn new(origin: impl Into<AirportCode>, destination: impl Into<AirportCode>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }
}

/// Load the direct flights from a CSV file on disk.
pub fn load_flights(path: &Path) -> Result<Vec<Flight>> {
    if !path.exists() {
        return Err(Error::DatasetNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = fs::File::open(path)?;
    let flights = flights_from_reader(file)?;
    info!(
        flights = flights.len(),
        "loaded direct flights from {}",
        path.display()
    );
    Ok(flights)
}

/// Read the flight table, discarding every row with one or more stops.
pub fn flights_from_reader<R: Read>(reader: R) -> Result<Vec<Flight>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut flights = Vec::new();
    let mut with_stops = 0usize;

    for (index, result) in csv_reader.records().enumerate() {
        let record = result?;
        let line = record
            .position()
            .map(|pos| pos.line())
            .unwrap_or(index as u64 + 1);

        let (flight, stops) = parse_flight(&record, line)?;
        if stops == 0 {
            flights.push(flight);
        } else {
            with_stops += 1;
        }
    }

    debug!(
        direct = flights.len(),
        with_stops, "filtered flight table to direct flights"
    );
    Ok(flights)
}

fn parse_flight(record: &StringRecord, line: u64) -> Result<(Flight, u32)> {
    let field = |column: usize| {
        record.get(column).ok_or_else(|| Error::InvalidRecord {
            table: "flight",
            line,
            reason: format!("expected at least {} columns, found {}", column + 1, record.len()),
        })
    };

    let raw_stops = field(STOPS_COLUMN)?;
    let stops = raw_stops
        .trim()
        .parse::<u32>()
        .map_err(|err| Error::InvalidRecord {
            table: "flight",
            line,
            reason: format!("stop count '{raw_stops}' is not a number: {err}"),
        })?;

    let flight = Flight::new(field(ORIGIN_COLUMN)?, field(DESTINATION_COLUMN)?);
    Ok((flight, stops))
}
