//! Inhabitants and the households they live in.
use crate::id::define_id_type;
use serde::Deserialize;

define_id_type! {Phn}

/// A person living in a household.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Inhabitant {
    /// Personal health number, unique to each inhabitant
    pub phn: Phn,
    /// The inhabitant's full name
    pub full_name: String,
    /// Whether the inhabitant has been vaccinated (or queued for vaccination)
    pub is_vaccinated: bool,
    /// Age in years
    pub age: u32,
}

impl Inhabitant {
    /// Whether this inhabitant should be queued for a shot in a round with the given intake
    pub fn is_eligible(&self, current_intake: u32) -> bool {
        !self.is_vaccinated && self.age >= current_intake
    }
}

/// A household located on a single block of a city.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Household {
    /// The block the household is on
    pub block_num: u32,
    /// The people living in the household, in input order
    #[serde(default)]
    pub inhabitants: Vec<Inhabitant>,
}

impl Household {
    /// Whether every member of the household is vaccinated.
    ///
    /// A household with no inhabitants counts as fully vaccinated.
    pub fn is_fully_vaccinated(&self) -> bool {
        self.inhabitants.iter().all(|inhabitant| inhabitant.is_vaccinated)
    }
}
