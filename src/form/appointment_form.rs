//! Appointment form: string bindings, a contact selector, and text-entered
//! start/end timestamps.

use chrono::{DateTime, NaiveDateTime, Utc};
use tracing::warn;

use crate::lookup::LookupMap;
use crate::model::{Appointment, Contact, ValidationError, Violation};

use super::binding::FieldBinding;
use super::controller::FormSpec;
use super::controls::{ControlSet, SelectBox};
use super::surface::Geometry;

/// Entry format for the start/end controls, in UTC.
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

static BINDINGS: &[FieldBinding<Appointment>] = &[
    FieldBinding::new("title", |a| &a.title, |a, v| a.title = v),
    // free text: whitespace is the user's business
    FieldBinding::new("description", |a: &Appointment| &a.description, |a, v| a.description = v).no_trim(),
    FieldBinding::new("location", |a| &a.location, |a, v| a.location = v),
    FieldBinding::new("kind", |a| &a.kind, |a, v| a.kind = v),
];

/// The appointment editor.
///
/// `contact_id` comes from a plain (non-cascading) selector; `start` and
/// `end` are typed into text controls and parsed on save, so a malformed
/// timestamp surfaces as an ordinary validation failure.
pub struct AppointmentForm {
    controls: ControlSet,
    contact_box: SelectBox<Contact>,
}

impl AppointmentForm {
    /// Builds the form, offering every known contact sorted by name.
    pub fn new(contacts: LookupMap<Contact>) -> Self {
        let controls = ControlSet::new([
            "id_field",
            "title_field",
            "description_field",
            "location_field",
            "kind_field",
            "start_field",
            "end_field",
        ]);

        let mut candidates: Vec<Contact> = contacts.values().cloned().collect();
        candidates.sort_by(|a, b| a.name.cmp(&b.name));
        let mut contact_box = SelectBox::new("contact_box");
        contact_box.set_items(candidates);

        Self {
            controls,
            contact_box,
        }
    }

    /// The contact selector.
    pub fn contact_box(&self) -> &SelectBox<Contact> {
        &self.contact_box
    }

    /// User-driven contact selection. Returns `true` if it took effect.
    pub fn select_contact(&mut self, index: usize) -> bool {
        self.contact_box.enabled() && self.contact_box.select(index)
    }

    fn set_time_field(&mut self, name: &str, value: DateTime<Utc>, read_only: bool) {
        if let Some(field) = self.controls.get_mut(name) {
            field.set_text(value.format(TIME_FORMAT).to_string());
            field.set_editable(!read_only);
        }
    }

    fn parse_time_field(&self, name: &str, attribute: &'static str) -> Result<DateTime<Utc>, Violation> {
        let text = self.controls.text(name);
        NaiveDateTime::parse_from_str(text.trim(), TIME_FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(|_| Violation::new(attribute, format!("expected a `{TIME_FORMAT}` timestamp")))
    }
}

impl FormSpec for AppointmentForm {
    type Record = Appointment;

    fn bindings() -> &'static [FieldBinding<Appointment>] {
        BINDINGS
    }

    fn controls(&self) -> &ControlSet {
        &self.controls
    }

    fn controls_mut(&mut self) -> &mut ControlSet {
        &mut self.controls
    }

    fn set_fields(&mut self, record: &Appointment, read_only: bool) {
        self.set_time_field("start_field", record.start, read_only);
        self.set_time_field("end_field", record.end, read_only);
        self.contact_box.set_enabled(!read_only);
        if record.contact_id != 0 && !self.contact_box.select_by(|c| c.id == record.contact_id) {
            warn!(
                contact_id = record.contact_id,
                "appointment references unknown contact"
            );
        }
    }

    fn apply_other_fields(&mut self, record: &mut Appointment) -> Result<(), ValidationError> {
        record.contact_id = self.contact_box.selected().map(|c| c.id).unwrap_or(0);

        let mut violations = Vec::new();
        match self.parse_time_field("start_field", "start") {
            Ok(start) => record.start = start,
            Err(violation) => violations.push(violation),
        }
        match self.parse_time_field("end_field", "end") {
            Ok(end) => record.end = end,
            Err(violation) => violations.push(violation),
        }
        ValidationError::collect(violations)
    }

    fn definition(&self) -> &'static str {
        "views/appointment_form.ui"
    }

    fn geometry(&self) -> Geometry {
        Geometry {
            width: 480,
            height: 520,
        }
    }
}
