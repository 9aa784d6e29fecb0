//! Cities are made up of households and clinics laid out along a line of blocks.
use crate::clinic::Clinic;
use crate::id::define_id_type;
use crate::inhabitant::Household;
use indexmap::IndexMap;
use serde::Deserialize;

define_id_type! {CityID}

/// A map of [`City`]s, keyed by city name, in input order
pub type CityMap = IndexMap<CityID, City>;

/// A city's households and clinics.
///
/// Either list may be missing from the input, in which case it is empty.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct City {
    /// Households, in input order
    #[serde(default)]
    pub households: Vec<Household>,
    /// Clinics, in input order
    #[serde(default)]
    pub clinics: Vec<Clinic>,
}

/// Find the index of the clinic closest to the given block.
///
/// Distance is the difference in block numbers. If several clinics are equally close, the first
/// one in the list wins. Returns `None` if there are no clinics.
pub fn find_nearest_clinic(clinics: &[Clinic], block_num: u32) -> Option<usize> {
    clinics
        .iter()
        .enumerate()
        .min_by_key(|(_, clinic)| clinic.distance_to(block_num))
        .map(|(idx, _)| idx)
}
