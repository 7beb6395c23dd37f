//! Form binding and lifecycle: controller, bindings, controls, cascade,
//! concrete forms, and factories.

pub mod appointment_form;
pub mod binding;
pub mod cascade;
pub mod controller;
pub mod controls;
pub mod customer_form;
pub mod factory;
pub mod surface;

pub use appointment_form::AppointmentForm;
pub use binding::{BindingError, BoundField, FieldBinding};
pub use controller::{FormController, FormSpec, FormState, Mode, SaveOutcome};
pub use controls::{CommitBar, ControlSet, SelectBox, TextField};
pub use customer_form::CustomerForm;
pub use factory::{AppointmentFormFactory, CustomerFormFactory, FormFactory};
pub use surface::{Geometry, ShowRequest, Surface, SurfaceError};
