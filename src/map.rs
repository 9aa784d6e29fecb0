//! Rendering of a compact, one-row-per-city map of blocks.
//!
//! Each block of a city is shown as a single character:
//!
//! * `x`: nothing on the block
//! * `H`: a household with at least one unvaccinated member
//! * `F`: a household whose members are all vaccinated
//! * `C`: a clinic (takes priority over a household on the same block)
//!
//! A row has one symbol per block from block 0 up to the highest occupied block, so its length is
//! set by the largest block number in the input (one byte per block).
use crate::city::City;
use crate::registry::Registry;
use anyhow::{Context, Result};
use itertools::Itertools;

const EMPTY_BLOCK: u8 = b'x';
const HOUSEHOLD_BLOCK: u8 = b'H';
const VACCINATED_HOUSEHOLD_BLOCK: u8 = b'F';
const CLINIC_BLOCK: u8 = b'C';

/// Separator placed between block symbols
const BLOCK_DELIMITER: &str = ",";

/// The number of cells needed to show every block up to and including `max_block`
fn row_length(max_block: u32) -> Result<usize> {
    usize::try_from(max_block)
        .ok()
        .and_then(|max_block| max_block.checked_add(1))
        .with_context(|| format!("Block {max_block} is too large to render"))
}

/// Get the symbol for every block of a city, from block 0 up to the highest occupied block.
///
/// A city with nothing in it has a single empty block.
pub fn city_blocks(city: &City) -> Result<Vec<u8>> {
    let max_block = city
        .households
        .iter()
        .map(|household| household.block_num)
        .chain(city.clinics.iter().map(|clinic| clinic.block_num))
        .max()
        .unwrap_or(0);

    // Every block number is <= max_block, so fits in the row
    let mut blocks = vec![EMPTY_BLOCK; row_length(max_block)?];
    for household in &city.households {
        blocks[household.block_num as usize] = if household.is_fully_vaccinated() {
            VACCINATED_HOUSEHOLD_BLOCK
        } else {
            HOUSEHOLD_BLOCK
        };
    }

    // Clinics are drawn last so they win over households on the same block
    for clinic in &city.clinics {
        blocks[clinic.block_num as usize] = CLINIC_BLOCK;
    }

    Ok(blocks)
}

/// Render a single city as a row of block symbols followed by the city's name
pub fn render_city_row(city_name: &str, city: &City) -> Result<String> {
    let row = city_blocks(city)?
        .into_iter()
        .map(char::from)
        .join(BLOCK_DELIMITER);

    Ok(format!("{row} // {city_name}"))
}

impl Registry {
    /// Render the map of every city, one row per city, in input order
    pub fn render_map(&self) -> Result<Vec<String>> {
        self.cities
            .iter()
            .map(|(city_id, city)| {
                render_city_row(&city_id.0, city)
                    .with_context(|| format!("Failed to render map of {city_id}"))
            })
            .collect()
    }
}
