use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::id::{HasId, Id};

use crate::{bus::Bus, ExampleData};

/// A tour attendee. Linked to at most one bus at a time; `bus_id` is `None`
/// while the participant is unassigned.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: Id<Participant>,
    pub name: String,
    pub phone: String,
    pub bus_id: Option<Id<Bus>>,
}

impl Participant {
    pub fn is_on_bus(&self, bus_id: &Id<Bus>) -> bool {
        self.bus_id.as_ref() == Some(bus_id)
    }
}

impl HasId for Participant {
    type IdType = String;
}

impl ExampleData for Participant {
    fn example_data() -> Self {
        Participant {
            id: "P1".into(),
            name: "Jane Miller".to_owned(),
            phone: "555-123-4567".to_owned(),
            bus_id: None,
        }
    }
}
