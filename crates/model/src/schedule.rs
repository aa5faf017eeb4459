use chrono::{DateTime, Duration, Local};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::id::Id;

use crate::{bus::Bus, location::Location};

/// One leg of a bus itinerary: the (bus, location) pair together with its
/// timing and distance data. Generated once per bus × location combination.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub bus_id: Id<Bus>,
    pub location_id: Id<Location>,
    pub departure_time: Option<DateTime<Local>>,
    pub arrival_time: Option<DateTime<Local>>,
    pub distance_km: f64,
    pub duration_min: f64,
}

impl Schedule {
    pub fn is_for(&self, bus_id: &Id<Bus>, location_id: &Id<Location>) -> bool {
        self.bus_id == *bus_id && self.location_id == *location_id
    }

    /// Travel time of this leg, truncated to whole minutes. All schedule
    /// arithmetic runs at minute granularity.
    pub fn duration(&self) -> Duration {
        Duration::minutes(self.duration_min.trunc() as i64)
    }
}
