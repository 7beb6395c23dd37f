//! Per-record form factories.
//!
//! A factory holds the shared reference data a form kind needs (queried from
//! the store once, not per form) and stamps out one controller per session
//! with a mode-appropriate window title.

use crate::lookup::LookupMap;
use crate::model::{Contact, Country, Division};

use super::appointment_form::AppointmentForm;
use super::controller::{FormController, FormSpec, Mode};
use super::customer_form::CustomerForm;

/// Constructs controllers for one kind of record form.
pub trait FormFactory {
    /// The concrete form this factory builds.
    type Spec: FormSpec;

    /// Builds a controller for one session. Pure construction: no store
    /// access, no side effects beyond object creation.
    fn instance(
        &self,
        mode: Mode,
        record: <Self::Spec as FormSpec>::Record,
        on_complete: impl FnOnce(Option<<Self::Spec as FormSpec>::Record>) + 'static,
    ) -> FormController<Self::Spec>;
}

fn title(mode: Mode, entity: &str) -> String {
    format!("{} {entity}", mode.verb())
}

/// Factory for [`CustomerForm`]s; carries the division and country maps.
pub struct CustomerFormFactory {
    divisions: LookupMap<Division>,
    countries: LookupMap<Country>,
}

impl CustomerFormFactory {
    /// Creates a factory around the shared reference maps.
    pub fn new(divisions: LookupMap<Division>, countries: LookupMap<Country>) -> Self {
        Self {
            divisions,
            countries,
        }
    }
}

impl FormFactory for CustomerFormFactory {
    type Spec = CustomerForm;

    fn instance(
        &self,
        mode: Mode,
        record: crate::model::Customer,
        on_complete: impl FnOnce(Option<crate::model::Customer>) + 'static,
    ) -> FormController<CustomerForm> {
        let form = CustomerForm::new(self.divisions.clone(), self.countries.clone());
        FormController::new(form, title(mode, "Customer"), record, mode, on_complete)
    }
}

/// Factory for [`AppointmentForm`]s; carries the contact map.
pub struct AppointmentFormFactory {
    contacts: LookupMap<Contact>,
}

impl AppointmentFormFactory {
    /// Creates a factory around the shared contact map.
    pub fn new(contacts: LookupMap<Contact>) -> Self {
        Self { contacts }
    }
}

impl FormFactory for AppointmentFormFactory {
    type Spec = AppointmentForm;

    fn instance(
        &self,
        mode: Mode,
        record: crate::model::Appointment,
        on_complete: impl FnOnce(Option<crate::model::Appointment>) + 'static,
    ) -> FormController<AppointmentForm> {
        let form = AppointmentForm::new(self.contacts.clone());
        FormController::new(form, title(mode, "Appointment"), record, mode, on_complete)
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{Appointment, Customer};

    use super::super::controller::FormState;
    use super::*;

    fn customer_factory() -> CustomerFormFactory {
        let divisions: LookupMap<Division> =
            [(7, Division::new(7, "Alberta", 2))].into_iter().collect();
        let countries: LookupMap<Country> =
            [(2, Country::new(2, "Canada"))].into_iter().collect();
        CustomerFormFactory::new(divisions, countries)
    }

    #[test]
    fn titles_follow_the_mode() {
        let factory = customer_factory();
        let cases = [
            (Mode::Create, "New Customer"),
            (Mode::Read, "View Customer"),
            (Mode::Update, "Edit Customer"),
        ];
        for (mode, expected) in cases {
            let form = factory.instance(mode, Customer::default(), |_| {});
            assert_eq!(form.title(), expected, "{mode:?} title mismatch");
        }
    }

    #[test]
    fn instance_is_unopened_and_mode_derived() {
        let factory = customer_factory();
        let form = factory.instance(Mode::Read, Customer::default(), |_| {});
        assert_eq!(form.state(), FormState::Unopened);
        assert!(form.read_only());
    }

    #[test]
    fn every_instance_sees_the_shared_reference_data() {
        let factory = customer_factory();
        for _ in 0..3 {
            let form = factory.instance(Mode::Create, Customer::default(), |_| {});
            assert_eq!(form.spec().country_box().items().len(), 1);
        }
    }

    #[test]
    fn appointment_factory_injects_contacts() {
        let contacts: LookupMap<Contact> =
            [(2, Contact::new(2, "Morgan Vale"))].into_iter().collect();
        let factory = AppointmentFormFactory::new(contacts);
        let form = factory.instance(Mode::Create, Appointment::default(), |_| {});
        assert_eq!(form.title(), "New Appointment");
        assert_eq!(form.spec().contact_box().items().len(), 1);
    }
}
