use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A star rating pair, rendered on the wire as `"given/max"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stars {
    pub given: u8,
    pub max: u8,
}

impl fmt::Display for Stars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.given, self.max)
    }
}

/// One rating for a coffee type. Never mutated after creation; new ratings
/// for the same coffee type append to its history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub coffee_type: String,
    pub stars: Stars,
    pub created_at: DateTime<Utc>,
}
