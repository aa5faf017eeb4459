use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::id::{HasId, Id};

use crate::ExampleData;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A static destination with descriptive metadata. Reference data only;
/// never mutated by the engines.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: Id<Location>,
    pub name: String,
    pub description: String,
    pub image_url: Option<String>,
    pub address: Option<String>,
    pub coordinates: Option<Coordinates>,
}

impl HasId for Location {
    type IdType = String;
}

impl ExampleData for Location {
    fn example_data() -> Self {
        Location {
            id: "1".into(),
            name: "Mountain Viewpoint".to_owned(),
            description: "Scenic overlook with panoramic mountain views."
                .to_owned(),
            image_url: None,
            address: None,
            coordinates: None,
        }
    }
}
