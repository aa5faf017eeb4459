//! The schedule / ETA engine: per-bus location visits joined with the
//! location reference data, plus cumulative-duration ETA projection.

use std::cmp::Ordering;

use chrono::{DateTime, Duration, Local};
use model::{bus::Bus, location::Location, schedule::Schedule};
use schemars::JsonSchema;
use serde::Serialize;
use utility::id::Id;

use crate::{state::AppState, Error, Result};

/// One row of a bus's schedule as shown to the operator: the schedule data
/// together with the resolved location.
#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BusLeg {
    #[serde(flatten)]
    pub schedule: Schedule,
    pub location: Location,
}

impl AppState {
    /// All legs of the given bus, sorted ascending by departure time.
    /// The sort is stable and treats a missing departure on either side as
    /// equal, so rows without a departure keep their relative order.
    pub fn schedules_for_bus(&self, bus_id: &Id<Bus>) -> Vec<BusLeg> {
        let mut legs: Vec<BusLeg> = self
            .schedules
            .iter()
            .filter(|schedule| schedule.bus_id == *bus_id)
            .filter_map(|schedule| {
                match self.location(&schedule.location_id) {
                    Some(location) => Some(BusLeg {
                        schedule: schedule.clone(),
                        location: location.clone(),
                    }),
                    None => {
                        log::warn!(
                            "schedule row for bus {} references unknown location {}",
                            bus_id,
                            schedule.location_id
                        );
                        None
                    }
                }
            })
            .collect();
        legs.sort_by(|a, b| {
            match (a.schedule.departure_time, b.schedule.departure_time) {
                (Some(lhs), Some(rhs)) => lhs.cmp(&rhs),
                _ => Ordering::Equal,
            }
        });
        legs
    }

    /// Projects the arrival time at `location_id`, starting from the leg at
    /// `from_index` in the bus's sorted schedule and accumulating the
    /// durations of all legs strictly before the match. `None` when the
    /// index is out of bounds, the starting leg has no departure time, or
    /// the location never shows up from there on.
    pub fn calculate_eta(
        &self,
        bus_id: &Id<Bus>,
        location_id: &Id<Location>,
        from_index: usize,
    ) -> Option<DateTime<Local>> {
        let legs = self.schedules_for_bus(bus_id);
        let start = legs.get(from_index)?.schedule.departure_time?;

        let mut cumulative_min = 0.0;
        for leg in &legs[from_index..] {
            if leg.schedule.location_id == *location_id {
                return Some(start + Duration::minutes(cumulative_min as i64));
            }
            cumulative_min += leg.schedule.duration_min;
        }
        None
    }

    /// Overwrites the departure time of the (bus, location) schedule row.
    /// Arrival times of this and later legs are left as they are; see
    /// [`AppState::reschedule_leg`] for the variant that recomputes the
    /// leg's own arrival.
    pub fn update_departure_time(
        &mut self,
        bus_id: &Id<Bus>,
        location_id: &Id<Location>,
        new_time: DateTime<Local>,
    ) -> Result<()> {
        let schedule = self.schedule_row_mut(bus_id, location_id)?;
        schedule.departure_time = Some(new_time);
        Ok(())
    }

    /// Overwrites the departure time and recomputes the same leg's arrival
    /// as departure plus travel duration.
    pub fn reschedule_leg(
        &mut self,
        bus_id: &Id<Bus>,
        location_id: &Id<Location>,
        new_time: DateTime<Local>,
    ) -> Result<()> {
        let schedule = self.schedule_row_mut(bus_id, location_id)?;
        schedule.departure_time = Some(new_time);
        schedule.arrival_time = Some(new_time + schedule.duration());
        log::info!(
            "rescheduled bus {} leg to {}: departs {}",
            bus_id,
            location_id,
            new_time.format("%H:%M")
        );
        Ok(())
    }

    fn schedule_row_mut(
        &mut self,
        bus_id: &Id<Bus>,
        location_id: &Id<Location>,
    ) -> Result<&mut Schedule> {
        self.schedules
            .iter_mut()
            .find(|schedule| schedule.is_for(bus_id, location_id))
            .ok_or(Error::NotFound)
    }
}

/// Percent of one leg already travelled at `now`, clamped to 0..=100 and
/// rounded down. Legs without both timestamps count as not started.
pub fn leg_progress(
    departure: Option<DateTime<Local>>,
    arrival: Option<DateTime<Local>>,
    now: DateTime<Local>,
) -> u8 {
    let (start, end) = match (departure, arrival) {
        (Some(start), Some(end)) => (start, end),
        _ => return 0,
    };
    if now < start {
        return 0;
    }
    if now > end {
        return 100;
    }
    let total = (end - start).num_milliseconds();
    if total <= 0 {
        return 100;
    }
    let elapsed = (now - start).num_milliseconds();
    ((elapsed as f64 / total as f64) * 100.0).floor() as u8
}

/// A leg is in progress while `now` lies between departure and arrival,
/// boundaries included.
pub fn leg_in_progress(
    departure: Option<DateTime<Local>>,
    arrival: Option<DateTime<Local>>,
    now: DateTime<Local>,
) -> bool {
    match (departure, arrival) {
        (Some(start), Some(end)) => start <= now && now <= end,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use model::ExampleData;

    use super::*;

    fn at(hour: u32, minute: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 4, 1, hour, minute, 0).unwrap()
    }

    fn leg(bus: &str, location: &str, departure: Option<DateTime<Local>>, duration_min: f64) -> Schedule {
        Schedule {
            bus_id: bus.into(),
            location_id: location.into(),
            departure_time: departure,
            arrival_time: departure
                .map(|d| d + Duration::minutes(duration_min as i64)),
            distance_km: duration_min / 1.5,
            duration_min,
        }
    }

    fn location(id: &str, name: &str) -> Location {
        Location {
            id: id.into(),
            name: name.to_owned(),
            description: String::new(),
            image_url: None,
            address: None,
            coordinates: None,
        }
    }

    fn two_leg_state() -> AppState {
        AppState {
            buses: vec![Bus::example_data()],
            locations: vec![
                location("1", "Mountain Viewpoint"),
                location("2", "Lakeside Resort"),
            ],
            schedules: vec![
                // inserted out of order on purpose
                leg("1", "2", Some(at(11, 0)), 45.0),
                leg("1", "1", Some(at(9, 0)), 30.0),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn legs_are_sorted_by_departure_and_joined() {
        let state = two_leg_state();
        let legs = state.schedules_for_bus(&"1".into());
        assert_eq!(legs.len(), 2);
        assert_eq!(legs[0].location.name, "Mountain Viewpoint");
        assert_eq!(legs[1].location.name, "Lakeside Resort");
    }

    #[test]
    fn eta_accumulates_durations_before_the_match() {
        let state = two_leg_state();
        // second leg: only the first leg's 30 minutes count
        let eta = state.calculate_eta(&"1".into(), &"2".into(), 0);
        assert_eq!(eta, Some(at(9, 30)));
        // the matching leg itself contributes nothing
        let eta = state.calculate_eta(&"1".into(), &"1".into(), 0);
        assert_eq!(eta, Some(at(9, 0)));
    }

    #[test]
    fn eta_is_none_out_of_bounds_or_without_departure() {
        let mut state = two_leg_state();
        assert_eq!(state.calculate_eta(&"1".into(), &"2".into(), 2), None);
        assert_eq!(state.calculate_eta(&"1".into(), &"9".into(), 0), None);
        // clear the first stored row's departure; with the comparator
        // treating missing departures as equal, the stable sort keeps it
        // at index 0
        state.schedules[0].departure_time = None;
        let legs = state.schedules_for_bus(&"1".into());
        assert!(legs[0].schedule.departure_time.is_none());
        assert_eq!(state.calculate_eta(&"1".into(), &"2".into(), 0), None);
    }

    #[test]
    fn update_departure_does_not_touch_arrivals() {
        let mut state = two_leg_state();
        let old_arrival = state.schedules[1].arrival_time;
        state
            .update_departure_time(&"1".into(), &"1".into(), at(10, 0))
            .unwrap();
        let row = state
            .schedules
            .iter()
            .find(|s| s.is_for(&"1".into(), &"1".into()))
            .unwrap();
        assert_eq!(row.departure_time, Some(at(10, 0)));
        assert_eq!(row.arrival_time, old_arrival);
        assert_eq!(
            state.update_departure_time(&"9".into(), &"1".into(), at(10, 0)),
            Err(Error::NotFound)
        );
    }

    #[test]
    fn reschedule_leg_recomputes_its_arrival() {
        let mut state = two_leg_state();
        state
            .reschedule_leg(&"1".into(), &"1".into(), at(10, 0))
            .unwrap();
        let row = state
            .schedules
            .iter()
            .find(|s| s.is_for(&"1".into(), &"1".into()))
            .unwrap();
        assert_eq!(row.departure_time, Some(at(10, 0)));
        assert_eq!(row.arrival_time, Some(at(10, 30)));
    }

    #[test]
    fn progress_is_clamped_and_floored() {
        let departure = Some(at(9, 0));
        let arrival = Some(at(10, 0));
        assert_eq!(leg_progress(departure, arrival, at(8, 0)), 0);
        assert_eq!(leg_progress(departure, arrival, at(9, 15)), 25);
        assert_eq!(leg_progress(departure, arrival, at(11, 0)), 100);
        assert_eq!(leg_progress(None, arrival, at(9, 30)), 0);
    }

    #[test]
    fn in_progress_includes_the_boundaries() {
        let departure = Some(at(9, 0));
        let arrival = Some(at(10, 0));
        assert!(leg_in_progress(departure, arrival, at(9, 0)));
        assert!(leg_in_progress(departure, arrival, at(10, 0)));
        assert!(!leg_in_progress(departure, arrival, at(10, 1)));
        assert!(!leg_in_progress(None, None, at(9, 30)));
    }
}
