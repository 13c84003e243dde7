use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use crate::error::{Error, Result};

/// Default filename for the airport table.
pub const AIRPORTS_FILENAME: &str = "airports.csv";
/// Default filename for the flight table.
pub const FLIGHTS_FILENAME: &str = "flights.csv";
/// Environment variable naming the directory holding both tables.
pub const DATA_DIR_ENV: &str = "SKYROUTE_DATA_DIR";

/// Paths to the two source tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    pub airports: PathBuf,
    pub flights: PathBuf,
}

impl DatasetPaths {
    /// Default table locations inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            airports: dir.join(AIRPORTS_FILENAME),
            flights: dir.join(FLIGHTS_FILENAME),
        }
    }
}

/// Caller-provided overrides for locating the dataset.
#[derive(Debug, Clone, Default)]
pub struct DatasetOptions {
    /// Directory holding `airports.csv` and `flights.csv`.
    pub data_dir: Option<PathBuf>,
    /// Explicit airport table, taking precedence over the directory.
    pub airports: Option<PathBuf>,
    /// Explicit flight table, taking precedence over the directory.
    pub flights: Option<PathBuf>,
}

/// Resolve the platform data directory used when nothing else is configured.
pub fn default_data_dir() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("com", "skyroute", "skyroute").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().to_path_buf())
}

/// Locate the dataset and verify both tables exist.
///
/// Each table is taken from its explicit override when present. Otherwise the
/// directory is resolved in order:
/// 1. `options.data_dir`.
/// 2. `SKYROUTE_DATA_DIR` environment variable.
/// 3. Platform-specific project data directory.
pub fn resolve_dataset(options: &DatasetOptions) -> Result<DatasetPaths> {
    resolve_with_env(options, env::var_os(DATA_DIR_ENV))
}

fn resolve_with_env(options: &DatasetOptions, env_dir: Option<OsString>) -> Result<DatasetPaths> {
    let paths = match (&options.airports, &options.flights) {
        (Some(airports), Some(flights)) => DatasetPaths {
            airports: airports.clone(),
            flights: flights.clone(),
        },
        (airports, flights) => {
            let dir = match (&options.data_dir, env_dir) {
                (Some(explicit), _) => explicit.clone(),
                (None, Some(from_env)) => PathBuf::from(from_env),
                (None, None) => default_data_dir()?,
            };
            debug!("resolved dataset directory {}", dir.display());
            let defaults = DatasetPaths::in_dir(&dir);
            DatasetPaths {
                airports: airports.clone().unwrap_or(defaults.airports),
                flights: flights.clone().unwrap_or(defaults.flights),
            }
        }
    };

    ensure_table(&paths.airports)?;
    ensure_table(&paths.flights)?;
    Ok(paths)
}

fn ensure_table(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(Error::DatasetNotFound {
            path: path.to_path_buf(),
        })
    }
}
