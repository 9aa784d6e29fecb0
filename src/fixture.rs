//! Fixtures for tests
use crate::city::City;
use crate::clinic::Clinic;
use crate::inhabitant::{Household, Inhabitant};
use crate::registry::Registry;
use indexmap::indexmap;
use rstest::fixture;

/// Assert that an error with the given message occurs
macro_rules! assert_error {
    ($result:expr, $msg:expr) => {
        assert_eq!(
            $result.unwrap_err().chain().next().unwrap().to_string(),
            $msg
        );
    };
}
pub(crate) use assert_error;

/// An unvaccinated inhabitant called "Person <phn>"
pub fn inhabitant(phn: &str, age: u32) -> Inhabitant {
    Inhabitant {
        phn: phn.into(),
        full_name: format!("Person {phn}"),
        is_vaccinated: false,
        age,
    }
}

/// A household on the given block
pub fn household(block_num: u32, inhabitants: Vec<Inhabitant>) -> Household {
    Household {
        block_num,
        inhabitants,
    }
}

/// One city with one unvaccinated 30-year-old at block 3 and a clinic "Main" at block 1
#[fixture]
pub fn townsville() -> Registry {
    let jane = Inhabitant {
        full_name: "Jane Doe".into(),
        ..inhabitant("1", 30)
    };
    let city = City {
        households: vec![household(3, vec![jane])],
        clinics: vec![Clinic::new("Main", 1, 2)],
    };

    Registry::new(indexmap! {"Townsville".into() => city}, 18)
}

/// A small data file with one complete city and one city with no households or clinics
pub const EXAMPLE_JSON: &str = r#"{
    "Townsville": {
        "households": [
            {"blockNum": 0, "inhabitants": [
                {"phn": "100", "fullName": "Ada Smith", "isVaccinated": true, "age": 70}
            ]},
            {"blockNum": 2, "inhabitants": [
                {"phn": "101", "fullName": "Bob Smith", "isVaccinated": false, "age": 12}
            ]}
        ],
        "clinics": [
            {"name": "Main", "blockNum": 1, "staff": 3}
        ]
    },
    "Emptyville": {}
}"#;
