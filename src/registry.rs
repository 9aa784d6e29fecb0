//! The registry of cities and the logic for registering inhabitants for shots.
use crate::city::{City, CityID, CityMap, find_nearest_clinic};
use crate::clinic::Clinic;
use crate::notice::Notice;
use log::debug;

/// The default minimum age for a shot, used if not overridden by settings or the command line
pub const DEFAULT_CURRENT_INTAKE: u32 = 50;

/// All of the cities being modelled, along with the age threshold for the current intake round
#[derive(Debug, Clone, PartialEq)]
pub struct Registry {
    /// Cities, keyed by name, in input order
    pub cities: CityMap,
    /// Minimum age at which an unvaccinated inhabitant is eligible for a shot
    pub current_intake: u32,
}

impl Registry {
    /// Create a new registry from already-loaded city data
    pub fn new(cities: CityMap, current_intake: u32) -> Self {
        Self {
            cities,
            current_intake,
        }
    }

    /// Iterate over the clinics of every city, in city order then clinic order
    pub fn clinics(&self) -> impl Iterator<Item = &Clinic> {
        self.cities.values().flat_map(|city| city.clinics.iter())
    }

    /// Register every eligible inhabitant for a shot at their nearest clinic.
    ///
    /// An inhabitant is eligible if they are not yet vaccinated and their age is at least
    /// `current_intake`. Eligible inhabitants are added to the queue of the nearest clinic in their
    /// city and marked as vaccinated. Cities are processed in input order, as are the households
    /// and inhabitants within them.
    ///
    /// # Returns
    ///
    /// The notices generated, in the order in which they occurred.
    pub fn register_for_shots(&mut self) -> Vec<Notice> {
        let mut notices = Vec::new();
        for (city_id, city) in &mut self.cities {
            debug!("Registering inhabitants of {city_id} for shots");
            register_city(city_id, city, self.current_intake, &mut notices);
        }

        notices
    }
}

/// Register eligible inhabitants of a single city, appending notices to `notices`
fn register_city(
    city_id: &CityID,
    city: &mut City,
    current_intake: u32,
    notices: &mut Vec<Notice>,
) {
    let City {
        households,
        clinics,
    } = city;

    for household in households.iter_mut() {
        let block_num = household.block_num;
        let mut unvaccinated = household
            .inhabitants
            .iter()
            .filter(|inhabitant| !inhabitant.is_vaccinated)
            .count();

        for inhabitant in &mut household.inhabitants {
            if !inhabitant.is_eligible(current_intake) {
                continue;
            }

            let Some(clinic_idx) = find_nearest_clinic(clinics, block_num) else {
                notices.push(Notice::NoClinicAvailable {
                    city: city_id.clone(),
                    block_num,
                    phn: inhabitant.phn.clone(),
                });
                continue;
            };

            let clinic = &mut clinics[clinic_idx];
            inhabitant.is_vaccinated = true;
            clinic.enqueue(inhabitant.clone());
            notices.push(Notice::Assigned {
                phn: inhabitant.phn.clone(),
                full_name: inhabitant.full_name.clone(),
                clinic: clinic.name.clone(),
            });

            // The household is complete once its last unvaccinated member has been queued
            unvaccinated -= 1;
            if unvaccinated == 0 {
                notices.push(Notice::HouseholdComplete {
                    city: city_id.clone(),
                    block_num,
                });
            }
        }
    }
}
