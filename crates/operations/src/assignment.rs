//! The assignment engine: mediates the many-participants-to-one-bus
//! relationship under each bus's capacity constraint.

use std::fmt;

use model::{bus::Bus, participant::Participant};
use utility::id::Id;

use crate::{state::AppState, Error, Result};

/// Confirmation of a successful assignment, ready to be surfaced to the
/// operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentReceipt {
    pub participant: String,
    pub bus: String,
}

impl fmt::Display for AssignmentReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} assigned to {}", self.participant, self.bus)
    }
}

impl AppState {
    /// Number of participants currently on the given bus.
    pub fn occupancy(&self, bus_id: &Id<Bus>) -> usize {
        self.participants
            .iter()
            .filter(|p| p.is_on_bus(bus_id))
            .count()
    }

    pub fn participants_by_bus(&self, bus_id: &Id<Bus>) -> Vec<&Participant> {
        self.participants
            .iter()
            .filter(|p| p.is_on_bus(bus_id))
            .collect()
    }

    /// Puts a participant on a bus. Fails when either id does not resolve
    /// or the bus is already full; in both cases nothing changes. A prior
    /// assignment to another bus is silently overwritten once capacity
    /// allows it.
    pub fn assign_participant(
        &mut self,
        participant_id: &Id<Participant>,
        bus_id: &Id<Bus>,
    ) -> Result<AssignmentReceipt> {
        if self.participant(participant_id).is_none() {
            return Err(Error::NotFound);
        }
        let bus = self.bus(bus_id).cloned().ok_or(Error::NotFound)?;

        if self.occupancy(bus_id) >= bus.capacity as usize {
            log::warn!(
                "refusing to assign {}: {} is at capacity ({})",
                participant_id,
                bus.label,
                bus.capacity
            );
            return Err(Error::CapacityExceeded { bus: bus.label });
        }

        let participant = self
            .participants
            .iter_mut()
            .find(|p| p.id == *participant_id)
            .ok_or(Error::NotFound)?;
        participant.bus_id = Some(bus_id.clone());
        let receipt = AssignmentReceipt {
            participant: participant.name.clone(),
            bus: bus.label,
        };
        log::info!("{}", receipt);
        Ok(receipt)
    }

    /// Takes a participant off whatever bus they are on. Succeeds even when
    /// they were not assigned to begin with. Returns the participant as
    /// updated, for the caller's confirmation message.
    pub fn remove_participant_from_bus(
        &mut self,
        participant_id: &Id<Participant>,
    ) -> Result<Participant> {
        let participant = self
            .participants
            .iter_mut()
            .find(|p| p.id == *participant_id)
            .ok_or(Error::NotFound)?;
        participant.bus_id = None;
        log::info!("{} removed from bus", participant.name);
        Ok(participant.clone())
    }

    /// Adds a bus to the fleet with the next free numeric id.
    pub fn add_bus(
        &mut self,
        label: &str,
        capacity: u32,
        manager_name: Option<String>,
    ) -> Result<Bus> {
        if label.trim().is_empty() {
            return Err(Error::EmptyInput("bus label"));
        }
        if capacity == 0 {
            return Err(Error::EmptyInput("capacity"));
        }
        let next = self
            .buses
            .iter()
            .filter_map(|bus| bus.id.raw_ref::<str>().parse::<u32>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        let bus = Bus {
            id: Bus::numeric_id(next),
            label: label.trim().to_owned(),
            capacity,
            manager_name,
        };
        log::info!("added {} (capacity {})", bus.label, bus.capacity);
        self.buses.push(bus.clone());
        Ok(bus)
    }

    /// Deletes a bus. Every participant on it is unassigned first; the
    /// number of participants that lost their seat is returned.
    pub fn delete_bus(&mut self, bus_id: &Id<Bus>) -> Result<usize> {
        if self.bus(bus_id).is_none() {
            return Err(Error::NotFound);
        }
        let mut unassigned = 0;
        for participant in &mut self.participants {
            if participant.bus_id.as_ref() == Some(bus_id) {
                participant.bus_id = None;
                unassigned += 1;
            }
        }
        self.buses.retain(|bus| bus.id != *bus_id);
        if self.selected_bus.as_ref() == Some(bus_id) {
            self.selected_bus = None;
        }
        log::info!("deleted bus {} ({} participants unassigned)", bus_id, unassigned);
        Ok(unassigned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participant(id: &str, name: &str) -> Participant {
        Participant {
            id: id.into(),
            name: name.to_owned(),
            phone: "555-000-0000".to_owned(),
            bus_id: None,
        }
    }

    fn small_fleet() -> AppState {
        AppState {
            buses: vec![Bus {
                id: "1".into(),
                label: "Bus 1".to_owned(),
                capacity: 2,
                manager_name: None,
            }],
            participants: vec![
                participant("P1", "John Smith"),
                participant("P2", "Jane Jones"),
                participant("P3", "Alex Brown"),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn assignment_respects_capacity() {
        let mut state = small_fleet();
        assert!(state.assign_participant(&"P1".into(), &"1".into()).is_ok());
        assert!(state.assign_participant(&"P2".into(), &"1".into()).is_ok());
        let third = state.assign_participant(&"P3".into(), &"1".into());
        assert_eq!(
            third,
            Err(Error::CapacityExceeded {
                bus: "Bus 1".to_owned()
            })
        );
        let on_bus: Vec<_> = state
            .participants_by_bus(&"1".into())
            .iter()
            .map(|p| p.id.raw())
            .collect();
        assert_eq!(on_bus, vec!["P1", "P2"]);
        // the refused participant is untouched
        assert!(state.participant(&"P3".into()).unwrap().bus_id.is_none());
    }

    #[test]
    fn occupancy_never_exceeds_capacity() {
        let mut state = small_fleet();
        for id in ["P1", "P2", "P3"] {
            let _ = state.assign_participant(&id.into(), &"1".into());
        }
        assert!(state.occupancy(&"1".into()) <= 2);
    }

    #[test]
    fn unknown_ids_are_refused_without_state_change() {
        let mut state = small_fleet();
        assert_eq!(
            state.assign_participant(&"P9".into(), &"1".into()),
            Err(Error::NotFound)
        );
        assert_eq!(
            state.assign_participant(&"P1".into(), &"9".into()),
            Err(Error::NotFound)
        );
        assert!(state.participant(&"P1".into()).unwrap().bus_id.is_none());
    }

    #[test]
    fn reassignment_is_exclusive() {
        let mut state = small_fleet();
        state.buses.push(Bus {
            id: "2".into(),
            label: "Bus 2".to_owned(),
            capacity: 2,
            manager_name: None,
        });
        state.assign_participant(&"P1".into(), &"1".into()).unwrap();
        state.assign_participant(&"P1".into(), &"2".into()).unwrap();
        assert_eq!(state.occupancy(&"1".into()), 0);
        assert_eq!(state.occupancy(&"2".into()), 1);
        assert_eq!(
            state.participant(&"P1".into()).unwrap().bus_id,
            Some("2".into())
        );
    }

    #[test]
    fn remove_is_idempotent() {
        let mut state = small_fleet();
        state.assign_participant(&"P1".into(), &"1".into()).unwrap();
        let removed = state.remove_participant_from_bus(&"P1".into()).unwrap();
        assert!(removed.bus_id.is_none());
        // removing again is not an error
        let removed = state.remove_participant_from_bus(&"P1".into()).unwrap();
        assert!(removed.bus_id.is_none());
        assert_eq!(
            state.remove_participant_from_bus(&"P9".into()),
            Err(Error::NotFound)
        );
    }

    #[test]
    fn delete_bus_cascades_to_assignments() {
        let mut state = small_fleet();
        state.assign_participant(&"P1".into(), &"1".into()).unwrap();
        state.assign_participant(&"P2".into(), &"1".into()).unwrap();
        state.select_bus(Some("1".into())).unwrap();
        let unassigned = state.delete_bus(&"1".into()).unwrap();
        assert_eq!(unassigned, 2);
        assert!(state.bus(&"1".into()).is_none());
        assert!(state.participants.iter().all(|p| p.bus_id.is_none()));
        assert!(state.selected_bus.is_none());
        assert_eq!(state.delete_bus(&"1".into()), Err(Error::NotFound));
    }

    #[test]
    fn add_bus_validates_and_allocates_the_next_id() {
        let mut state = small_fleet();
        assert_eq!(
            state.add_bus("  ", 10, None),
            Err(Error::EmptyInput("bus label"))
        );
        assert_eq!(
            state.add_bus("Bus 2", 0, None),
            Err(Error::EmptyInput("capacity"))
        );
        let bus = state.add_bus("Bus 2", 40, Some("Sarah".to_owned())).unwrap();
        assert_eq!(bus.id, "2".into());
        assert_eq!(state.buses.len(), 2);
    }
}
