use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::json::{ensure_set, Validate};
use crate::required::Required;

/// A person record. Only `name` is required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub name: Required<String>,
    #[serde(default)]
    pub age: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Person {
    /// Create a person with only the name set
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Required::new(name.into()),
            ..Default::default()
        }
    }
}

impl Validate for Person {
    fn validate(&self) -> Result<()> {
        ensure_set("name", &self.name)
    }
}
