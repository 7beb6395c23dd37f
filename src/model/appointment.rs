use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record::Record;
use super::validation::{ValidationError, Violation, validate_required};

/// An appointment record.
///
/// `title`, `description`, `location`, and `kind` are bound generically;
/// `contact_id` comes from the contact selector and `start`/`end` are parsed
/// from text controls by the appointment form. `customer_id` is set by the
/// caller (the appointment is always opened in a customer's context).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub location: String,
    pub kind: String,
    pub customer_id: u64,
    pub contact_id: u64,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Default for Appointment {
    fn default() -> Self {
        Self {
            id: 0,
            title: String::new(),
            description: String::new(),
            location: String::new(),
            kind: String::new(),
            customer_id: 0,
            contact_id: 0,
            start: DateTime::UNIX_EPOCH,
            end: DateTime::UNIX_EPOCH,
        }
    }
}

impl Record for Appointment {
    fn id(&self) -> u64 {
        self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Vec::new();
        violations.extend(validate_required("title", &self.title));
        violations.extend(validate_required("kind", &self.kind));
        if self.customer_id == 0 {
            violations.push(Violation::new("customer_id", "a customer must be attached"));
        }
        if self.contact_id == 0 {
            violations.push(Violation::new("contact_id", "a contact must be selected"));
        }
        if self.end <= self.start {
            violations.push(Violation::new("end", "must be after the start time"));
        }
        ValidationError::collect(violations)
    }
}
