//! Common routines for handling input data.
use crate::city::CityMap;
use crate::registry::Registry;
use anyhow::{Context, Result};
use log::debug;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Format an error message to include the file path
pub fn input_err_msg<P: AsRef<Path>>(file_path: P) -> String {
    format!("Error reading {}", file_path.as_ref().display())
}

/// Read a JSON file of the specified type.
///
/// # Arguments
///
/// * `file_path` - Path to the JSON file
pub fn read_json<T: DeserializeOwned>(file_path: &Path) -> Result<T> {
    let json_str = fs::read_to_string(file_path).with_context(|| input_err_msg(file_path))?;
    let json_data = serde_json::from_str(&json_str).with_context(|| input_err_msg(file_path))?;
    Ok(json_data)
}

/// Parse a TOML file at the specified path.
///
/// # Arguments
///
/// * `file_path` - Path to the TOML file
pub fn read_toml<T: DeserializeOwned>(file_path: &Path) -> Result<T> {
    let toml_str = fs::read_to_string(file_path).with_context(|| input_err_msg(file_path))?;
    let toml_data = toml::from_str(&toml_str).with_context(|| input_err_msg(file_path))?;
    Ok(toml_data)
}

/// Load a registry of cities from a JSON data file.
///
/// The file must contain an object keyed by city name, each city having optional `households`
/// and `clinics` lists.
///
/// # Arguments
///
/// * `file_path` - Path to the data file
/// * `current_intake` - Minimum age for a shot in this round
pub fn load_registry(file_path: &Path, current_intake: u32) -> Result<Registry> {
    let cities: CityMap = read_json(file_path)?;
    for (city_id, city) in &cities {
        debug!(
            "Loaded {city_id}: {} households, {} clinics",
            city.households.len(),
            city.clinics.len()
        );
    }

    Ok(Registry::new(cities, current_intake))
}
