#![allow(dead_code)]

use std::path::PathBuf;

use skyroute_lib::{load_network, DatasetPaths, FlightNetwork};

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

pub fn fixture_paths() -> DatasetPaths {
    DatasetPaths::in_dir(&fixtures_dir())
}

pub fn fixture_network() -> FlightNetwork {
    load_network(&fixture_paths()).expect("fixture dataset loads")
}
