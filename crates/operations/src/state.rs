use model::{
    bus::Bus,
    location::Location,
    participant::Participant,
    schedule::Schedule,
    tour::{Tour, TourManager},
};
use roster::Roster;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::id::Id;

use crate::{Error, Result};

/// Which screen of the dashboard is active. The UI layer renders it; the
/// state only records it.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum ActiveView {
    #[default]
    Dashboard,
    BusAssignment,
    EtaTracker,
    Destination,
    Notifications,
    TourPlanning,
}

/// The whole application state: entity collections plus the current UI
/// selection. Owned by the caller and passed down explicitly; every
/// mutation goes through a method here or in one of the engine modules,
/// so the engines can be exercised without any UI harness.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub buses: Vec<Bus>,
    pub participants: Vec<Participant>,
    pub locations: Vec<Location>,
    pub schedules: Vec<Schedule>,
    pub tours: Vec<Tour>,
    pub managers: Vec<TourManager>,
    pub selected_bus: Option<Id<Bus>>,
    pub selected_location: Option<Id<Location>>,
    pub active_view: ActiveView,
}

impl AppState {
    /// State as of process start: the generated roster, dashboard view,
    /// nothing selected.
    pub fn from_roster(roster: Roster) -> Self {
        Self {
            buses: roster.buses,
            participants: roster.participants,
            locations: roster.locations,
            schedules: roster.schedules,
            tours: roster.tours,
            managers: roster.managers,
            selected_bus: None,
            selected_location: None,
            active_view: ActiveView::Dashboard,
        }
    }

    pub fn bus(&self, id: &Id<Bus>) -> Option<&Bus> {
        self.buses.iter().find(|bus| bus.id == *id)
    }

    pub fn participant(&self, id: &Id<Participant>) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == *id)
    }

    pub fn location(&self, id: &Id<Location>) -> Option<&Location> {
        self.locations.iter().find(|location| location.id == *id)
    }

    pub fn tour(&self, id: &Id<Tour>) -> Option<&Tour> {
        self.tours.iter().find(|tour| tour.id == *id)
    }

    pub fn manager(&self, id: &Id<TourManager>) -> Option<&TourManager> {
        self.managers.iter().find(|manager| manager.id == *id)
    }

    /// Selects a bus (or clears the selection with `None`). Selecting an
    /// unknown bus is refused instead of leaving a dangling selection.
    pub fn select_bus(&mut self, id: Option<Id<Bus>>) -> Result<()> {
        if let Some(id) = &id {
            if self.bus(id).is_none() {
                return Err(Error::NotFound);
            }
        }
        self.selected_bus = id;
        Ok(())
    }

    pub fn select_location(&mut self, id: Option<Id<Location>>) -> Result<()> {
        if let Some(id) = &id {
            if self.location(id).is_none() {
                return Err(Error::NotFound);
            }
        }
        self.selected_location = id;
        Ok(())
    }

    pub fn set_active_view(&mut self, view: ActiveView) {
        self.active_view = view;
    }
}

#[cfg(test)]
mod tests {
    use model::ExampleData;

    use super::*;

    #[test]
    fn selecting_unknown_bus_is_refused() {
        let mut state = AppState::default();
        let result = state.select_bus(Some("1".into()));
        assert_eq!(result, Err(Error::NotFound));
        assert!(state.selected_bus.is_none());
    }

    #[test]
    fn selection_can_be_cleared() {
        let mut state = AppState {
            buses: vec![Bus::example_data()],
            ..Default::default()
        };
        state.select_bus(Some("1".into())).unwrap();
        assert_eq!(state.selected_bus, Some("1".into()));
        state.select_bus(None).unwrap();
        assert!(state.selected_bus.is_none());
    }

    #[test]
    fn default_view_is_the_dashboard() {
        let state = AppState::default();
        assert_eq!(state.active_view, ActiveView::Dashboard);
    }
}
