mod appointment;
mod customer;
mod record;
mod reference;
mod validation;

pub use appointment::Appointment;
pub use customer::Customer;
pub use record::Record;
pub use reference::{Contact, Country, Division};
pub use validation::{ValidationError, Violation, validate_phone, validate_required};
