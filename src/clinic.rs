//! Clinics and their first-in-first-out queues of inhabitants waiting for a shot.
use crate::id::define_id_type;
use crate::inhabitant::Inhabitant;
use crate::units::{MINUTES_PER_PERSON, Minutes};
use serde::Deserialize;
use std::collections::VecDeque;

define_id_type! {ClinicID}

/// A vaccination clinic located on a single block of a city.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Clinic {
    /// The clinic's display name
    pub name: ClinicID,
    /// The block the clinic is on
    pub block_num: u32,
    /// Number of staff working at the clinic.
    ///
    /// NB: This does not currently affect wait times or assignment.
    #[serde(default)]
    pub staff: u32,
    /// Inhabitants waiting in line, with the head of the queue at the front
    #[serde(skip)]
    queue: VecDeque<Inhabitant>,
}

impl Clinic {
    /// Create a new clinic with an empty queue
    pub fn new(name: &str, block_num: u32, staff: u32) -> Self {
        Self {
            name: name.into(),
            block_num,
            staff,
            queue: VecDeque::new(),
        }
    }

    /// Add an inhabitant to the back of the queue
    pub fn enqueue(&mut self, person: Inhabitant) {
        self.queue.push_back(person);
    }

    /// Remove the inhabitant at the front of the queue, if there is one
    pub fn dequeue(&mut self) -> Option<Inhabitant> {
        self.queue.pop_front()
    }

    /// The number of inhabitants currently in the queue
    pub fn size(&self) -> usize {
        self.queue.len()
    }

    /// Iterate over the queue, starting from the front
    pub fn iter_queue(&self) -> impl Iterator<Item = &Inhabitant> {
        self.queue.iter()
    }

    /// Estimated wait time for someone joining the back of the queue now, capped at `u32::MAX`
    pub fn current_wait_time(&self) -> Minutes {
        let size = u32::try_from(self.size()).unwrap_or(u32::MAX);
        MINUTES_PER_PERSON * size
    }

    /// The absolute distance, in blocks, from this clinic to the given block
    pub fn distance_to(&self, block_num: u32) -> u32 {
        self.block_num.abs_diff(block_num)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::inhabitant;
    use crate::inhabitant::Phn;
    use rstest::rstest;

    #[test]
    fn test_queue_is_fifo() {
        let mut clinic = Clinic::new("Main", 1, 3);
        clinic.enqueue(inhabitant("1", 30));
        clinic.enqueue(inhabitant("2", 40));

        assert_eq!(clinic.size(), 2);
        assert_eq!(clinic.dequeue().unwrap().phn, Phn::from("1"));
        assert_eq!(clinic.dequeue().unwrap().phn, Phn::from("2"));
        assert_eq!(clinic.size(), 0);
    }

    #[test]
    fn test_dequeue_empty() {
        let mut clinic = Clinic::new("Main", 1, 3);
        assert!(clinic.dequeue().is_none());
        assert_eq!(clinic.size(), 0);
    }

    #[test]
    fn test_wait_time_tracks_queue() {
        let mut clinic = Clinic::new("Main", 1, 3);
        assert_eq!(clinic.current_wait_time(), Minutes(0));

        clinic.enqueue(inhabitant("1", 30));
        assert_eq!(clinic.current_wait_time(), Minutes(15));

        clinic.enqueue(inhabitant("2", 40));
        clinic.enqueue(inhabitant("3", 50));
        assert_eq!(clinic.current_wait_time(), Minutes(45));

        clinic.dequeue();
        assert_eq!(clinic.current_wait_time(), Minutes(30));
    }

    #[rstest]
    #[case(2, 5, 3)]
    #[case(9, 5, 4)]
    #[case(5, 5, 0)]
    fn test_distance_to(#[case] clinic_block: u32, #[case] block: u32, #[case] expected: u32) {
        assert_eq!(Clinic::new("Main", clinic_block, 1).distance_to(block), expected);
    }

    #[test]
    fn test_deserialise_clinic() {
        let clinic: Clinic =
            serde_json::from_str(r#"{"name": "Main", "blockNum": 1, "staff": 4}"#).unwrap();
        assert_eq!(clinic, Clinic::new("Main", 1, 4));
        assert_eq!(clinic.size(), 0);
    }

    #[test]
    fn test_deserialise_clinic_missing_staff() {
        let clinic: Clinic = serde_json::from_str(r#"{"name": "Main", "blockNum": 1}"#).unwrap();
        assert_eq!(clinic.staff, 0);
    }
}
