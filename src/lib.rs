//! Common functionality for vaxmap.
//!
//! vaxmap reads a description of the households and clinics in one or more cities, registers
//! unvaccinated inhabitants who are old enough for a shot at their nearest clinic and reports on
//! the resulting clinic queues.
#![warn(missing_docs)]
use std::path::PathBuf;

pub mod city;
pub mod cli;
pub mod clinic;
pub mod id;
pub mod inhabitant;
pub mod input;
pub mod log;
pub mod map;
pub mod notice;
pub mod registry;
pub mod report;
pub mod settings;
pub mod simulation;
pub mod units;

#[cfg(test)]
mod fixture;

/// Get the config directory for vaxmap, i.e. where the settings file lives.
///
/// Falls back to the current directory if the platform has no config directory.
pub fn get_vaxmap_config_dir() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_default();
    path.push("vaxmap");

    path
}
