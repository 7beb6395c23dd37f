//! Read-only reference entities selected from lookup maps.

use serde::{Deserialize, Serialize};

/// A country, the parent side of the country/division cascade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub id: u64,
    pub name: String,
}

/// A first-level division (state, province, ...) belonging to one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Division {
    pub id: u64,
    pub name: String,
    pub country_id: u64,
}

/// A contact an appointment is scheduled with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: u64,
    pub name: String,
}

impl Country {
    /// Creates a country.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl Division {
    /// Creates a division under the given country.
    pub fn new(id: u64, name: impl Into<String>, country_id: u64) -> Self {
        Self {
            id,
            name: name.into(),
            country_id,
        }
    }
}

impl Contact {
    /// Creates a contact.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
