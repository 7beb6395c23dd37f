//! Core of a scheduling data-entry application: generic record-form binding
//! and lifecycle control.
//!
//! The crate owns everything between a domain record and the widget toolkit:
//! a declarative field-binding table ([`form::binding`]), a generic form
//! lifecycle controller ([`form::FormController`]) with a one-shot completion
//! callback, a cascading parent/dependent selector pattern
//! ([`form::cascade`]), and per-record form factories ([`form::factory`]).
//! Widgets, windowing, and SQL persistence stay outside — the toolkit is
//! represented by plain control structs and the window by the
//! [`form::Surface`] trait.

pub mod form;
pub mod lookup;
pub mod model;
