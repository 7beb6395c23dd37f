//! Declarative binding of string record attributes to text controls.
//!
//! Each concrete form declares a static table of [`FieldBinding`]s: one entry
//! per string attribute, with accessor functions and the name of the control
//! it binds to. The table replaces any runtime field discovery — it is
//! resolved against the form's [`ControlSet`] once, when the form opens, and
//! every entry that cannot be matched is reported as a [`BindingError`].
//! A missing control degrades only that one field's automation; the rest of
//! the table keeps working.

use thiserror::Error;

use super::controls::ControlSet;

/// A declared association between one string attribute and one text control.
pub struct FieldBinding<T> {
    /// Attribute name, used in diagnostics and to derive the control name.
    pub attribute: &'static str,
    /// Explicit control name; when `None`, the `<attribute>_field` naming
    /// convention applies.
    pub control: Option<&'static str>,
    /// Reads the attribute from the record.
    pub get: fn(&T) -> &str,
    /// Writes a value back into the record.
    pub set: fn(&mut T, String),
    /// Whether leading/trailing whitespace is stripped on save. Off for
    /// free-text attributes.
    pub trim: bool,
}

impl<T> FieldBinding<T> {
    /// Creates a binding using the `<attribute>_field` naming convention,
    /// with trimming on.
    pub const fn new(attribute: &'static str, get: fn(&T) -> &str, set: fn(&mut T, String)) -> Self {
        Self {
            attribute,
            control: None,
            get,
            set,
            trim: true,
        }
    }

    /// Overrides the conventional control name.
    pub const fn with_control(mut self, control: &'static str) -> Self {
        self.control = Some(control);
        self
    }

    /// Disables whitespace trimming for this attribute.
    pub const fn no_trim(mut self) -> Self {
        self.trim = false;
        self
    }

    /// The control name this binding resolves against.
    pub fn control_name(&self) -> String {
        match self.control {
            Some(control) => control.to_string(),
            None => format!("{}_field", self.attribute),
        }
    }
}

/// A declared binding with no matching control on the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no control named `{control}` for attribute `{attribute}`")]
pub struct BindingError {
    pub attribute: &'static str,
    pub control: String,
}

/// A binding resolved to a concrete control index.
pub struct BoundField<T: 'static> {
    binding: &'static FieldBinding<T>,
    control: usize,
}

/// Matches every table entry against the control set.
///
/// Returns the resolved pairs in table order plus one error per entry whose
/// control does not exist. The caller decides how loud to be about the
/// errors; resolution itself never fails.
pub fn resolve<T>(
    bindings: &'static [FieldBinding<T>],
    controls: &ControlSet,
) -> (Vec<BoundField<T>>, Vec<BindingError>) {
    let mut bound = Vec::with_capacity(bindings.len());
    let mut errors = Vec::new();
    for binding in bindings {
        let control = binding.control_name();
        match controls.index_of(&control) {
            Some(index) => bound.push(BoundField {
                binding,
                control: index,
            }),
            None => errors.push(BindingError {
                attribute: binding.attribute,
                control,
            }),
        }
    }
    (bound, errors)
}

/// Copies each bound attribute into its control and applies the read-only
/// policy to the control's editable flag.
pub fn push_record_to_form<T>(
    record: &T,
    bound: &[BoundField<T>],
    controls: &mut ControlSet,
    read_only: bool,
) {
    for pair in bound {
        let field = controls.by_index_mut(pair.control);
        field.set_text((pair.binding.get)(record));
        field.set_editable(!read_only);
    }
}

/// Copies each bound control's text back into its attribute, trimming
/// whitespace where the binding asks for it.
pub fn pull_form_to_record<T>(record: &mut T, bound: &[BoundField<T>], controls: &ControlSet) {
    for pair in bound {
        let text = controls.by_index(pair.control).text();
        let value = if pair.binding.trim {
            text.trim().to_string()
        } else {
            text.to_string()
        };
        (pair.binding.set)(record, value);
    }
}
