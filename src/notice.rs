//! Notices emitted while registering inhabitants for shots.
use crate::city::CityID;
use crate::clinic::ClinicID;
use crate::inhabitant::Phn;
use derive_more::Display;
use log::Level;

/// Something that happened to an inhabitant or household during registration
#[derive(Debug, Clone, PartialEq, Display)]
pub enum Notice {
    /// An inhabitant was added to a clinic's queue
    #[display("{full_name} added to queue at {clinic}")]
    Assigned {
        /// The inhabitant's personal health number
        phn: Phn,
        /// The inhabitant's full name
        full_name: String,
        /// The clinic whose queue they joined
        clinic: ClinicID,
    },
    /// The last unvaccinated member of a household was assigned to a clinic
    #[display("All members of household at block {block_num} in {city} are vaccinated.")]
    HouseholdComplete {
        /// The city the household is in
        city: CityID,
        /// The household's block
        block_num: u32,
    },
    /// An eligible inhabitant could not be assigned because their city has no clinics
    #[display("No clinics available near household at block {block_num} in {city}")]
    NoClinicAvailable {
        /// The city the household is in
        city: CityID,
        /// The household's block
        block_num: u32,
        /// The inhabitant who was left unassigned
        phn: Phn,
    },
}

impl Notice {
    /// The level at which this notice is logged.
    ///
    /// All notices share one level so that they end up in the same stream, in order. A missing
    /// clinic is an expected outcome rather than a warning.
    pub fn level(&self) -> Level {
        match self {
            Self::Assigned { .. }
            | Self::HouseholdComplete { .. }
            | Self::NoClinicAvailable { .. } => Level::Info,
        }
    }

    /// Write this notice to the program log
    pub fn log(&self) {
        log::log!(self.level(), "{self}");
    }
}
