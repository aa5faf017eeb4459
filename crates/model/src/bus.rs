use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::id::{HasId, Id};

use crate::ExampleData;

/// A vehicle with a fixed seating capacity, transporting participants
/// between tour locations.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Bus {
    pub id: Id<Bus>,
    pub label: String,
    /// Seats available. Always positive; enforced when a bus is created.
    pub capacity: u32,
    pub manager_name: Option<String>,
}

impl Bus {
    /// Fleet ids are numeric strings ("1", "2", ...).
    pub fn numeric_id(n: u32) -> Id<Bus> {
        Id::new(n.to_string())
    }
}

impl HasId for Bus {
    type IdType = String;
}

impl ExampleData for Bus {
    fn example_data() -> Self {
        Bus {
            id: "1".into(),
            label: "Bus 1".to_owned(),
            capacity: 50,
            manager_name: None,
        }
    }
}
