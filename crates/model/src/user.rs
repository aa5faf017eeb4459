use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::id::{HasId, Id};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    SuperAdmin,
    TourManager,
}

impl UserRole {
    /// Bus creation and user management are reserved for admins; tour
    /// managers only operate the day-to-day modules.
    pub fn can_manage_fleet(&self) -> bool {
        matches!(self, UserRole::SuperAdmin)
    }
}

/// A dashboard operator. Credentials live in the auth directory, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Id<User>,
    pub email: String,
    pub name: String,
    pub role: UserRole,
}

impl HasId for User {
    type IdType = String;
}
