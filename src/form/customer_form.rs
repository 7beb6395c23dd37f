//! Customer form: generic string bindings plus the country/division cascade.

use tracing::warn;

use crate::lookup::LookupMap;
use crate::model::{Country, Customer, Division, ValidationError};

use super::binding::FieldBinding;
use super::cascade::repopulate_dependents;
use super::controller::FormSpec;
use super::controls::{ControlSet, SelectBox};
use super::surface::Geometry;

static BINDINGS: &[FieldBinding<Customer>] = &[
    FieldBinding::new("name", |c| &c.name, |c, v| c.name = v),
    FieldBinding::new("address", |c| &c.address, |c, v| c.address = v),
    FieldBinding::new("postal_code", |c| &c.postal_code, |c, v| c.postal_code = v),
    FieldBinding::new("phone", |c| &c.phone, |c, v| c.phone = v),
];

/// The customer editor.
///
/// Name, address, postal code, and phone go through the binding table;
/// `division_id` goes through a cascading country → division selector pair
/// fed by lookup maps the factory injects once.
pub struct CustomerForm {
    controls: ControlSet,
    country_box: SelectBox<Country>,
    division_box: SelectBox<Division>,
    divisions: LookupMap<Division>,
}

impl CustomerForm {
    /// Builds the form and its selectors from the shared reference data.
    ///
    /// Only countries that actually have divisions are offered — a customer
    /// cannot be saved without a division, so a division-less country would
    /// be a dead end. The division selector stays disabled until a country
    /// is chosen.
    pub fn new(divisions: LookupMap<Division>, countries: LookupMap<Country>) -> Self {
        let controls = ControlSet::new([
            "id_field",
            "name_field",
            "address_field",
            "postal_code_field",
            "phone_field",
        ]);

        let mut candidates: Vec<Country> = countries
            .values()
            .filter(|c| divisions.values().any(|d| d.country_id == c.id))
            .cloned()
            .collect();
        candidates.sort_by(|a, b| a.name.cmp(&b.name));
        let mut country_box = SelectBox::new("country_box");
        country_box.set_items(candidates);

        let mut division_box = SelectBox::new("division_box");
        division_box.set_enabled(false);

        Self {
            controls,
            country_box,
            division_box,
            divisions,
        }
    }

    /// The country selector.
    pub fn country_box(&self) -> &SelectBox<Country> {
        &self.country_box
    }

    /// The division selector.
    pub fn division_box(&self) -> &SelectBox<Division> {
        &self.division_box
    }

    /// User-driven country selection: repopulates the division candidates.
    ///
    /// Inert while the selector is disabled (read-only forms), like any
    /// disabled control. Returns `true` if the selection changed.
    pub fn select_country(&mut self, index: usize) -> bool {
        if !self.country_box.enabled() || !self.country_box.select(index) {
            return false;
        }
        self.repopulate_divisions(false);
        true
    }

    /// User-driven division selection. Returns `true` if it took effect.
    pub fn select_division(&mut self, index: usize) -> bool {
        self.division_box.enabled() && self.division_box.select(index)
    }

    fn repopulate_divisions(&mut self, read_only: bool) {
        let parent_id = self.country_box.selected().map(|c| c.id).unwrap_or(0);
        repopulate_dependents(
            &mut self.division_box,
            &self.divisions,
            parent_id,
            |d| d.country_id,
            |d| &d.name,
            read_only,
        );
    }
}

impl FormSpec for CustomerForm {
    type Record = Customer;

    fn bindings() -> &'static [FieldBinding<Customer>] {
        BINDINGS
    }

    fn controls(&self) -> &ControlSet {
        &self.controls
    }

    fn controls_mut(&mut self) -> &mut ControlSet {
        &mut self.controls
    }

    fn set_fields(&mut self, record: &Customer, read_only: bool) {
        self.country_box.set_enabled(!read_only);
        match self.divisions.get(record.division_id) {
            Some(division) => {
                let country_id = division.country_id;
                if !self.country_box.select_by(|c| c.id == country_id) {
                    warn!(country_id, "division's country missing from selector");
                }
                self.repopulate_divisions(read_only);
                self.division_box.select_by(|d| d.id == record.division_id);
            }
            None => {
                // Dangling division_id: open anyway with nothing selected.
                warn!(
                    division_id = record.division_id,
                    "customer references unknown division"
                );
            }
        }
    }

    fn apply_other_fields(&mut self, record: &mut Customer) -> Result<(), ValidationError> {
        record.division_id = self.division_box.selected().map(|d| d.id).unwrap_or(0);
        Ok(())
    }

    fn definition(&self) -> &'static str {
        "views/customer_form.ui"
    }

    fn geometry(&self) -> Geometry {
        Geometry {
            width: 400,
            height: 400,
        }
    }
}
