//! Profile owner representation

use serde::{Deserialize, Serialize};

/// The faculty member whose catalog this is.
///
/// The `name` field doubles as the "self author" excluded from co-author
/// statistics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub affiliation: String,
    pub position: String,
    pub department: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl User {
    /// Create a new user with required fields
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            email: email.into(),
            affiliation: String::new(),
            position: String::new(),
            department: String::new(),
            photo_url: None,
        }
    }

    /// Builder method to set affiliation
    pub fn with_affiliation(mut self, affiliation: impl Into<String>) -> Self {
        self.affiliation = affiliation.into();
        self
    }

    /// Builder method to set position
    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = position.into();
        self
    }

    /// Builder method to set department
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }
}
