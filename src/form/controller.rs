//! Generic form lifecycle controller.
//!
//! One controller drives every concrete form through the same cycle:
//! `Unopened → Populating → Editing → {Validating → Saved |
//! back to Editing on validation failure} → Closed`. The entity-specific
//! pieces — the binding table, non-string attributes, the visual definition
//! and geometry — come from a [`FormSpec`] implementation composed in by the
//! factory, never from subclassing.

use tracing::{error, warn};

use crate::model::{Record, ValidationError};

use super::binding::{self, BoundField, FieldBinding};
use super::controls::ControlSet;
use super::surface::{Geometry, ShowRequest, Surface};

/// The intent a form is opened with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Enter a fresh record; no pre-population runs.
    Create,
    /// Inspect an existing record; every input disabled, no save available.
    Read,
    /// Edit an existing record; pre-population and save both active.
    Update,
}

impl Mode {
    /// Window-title verb for this mode.
    pub fn verb(self) -> &'static str {
        match self {
            Self::Create => "New",
            Self::Read => "View",
            Self::Update => "Edit",
        }
    }

    /// Returns `true` for the inspect-only mode.
    pub fn is_read_only(self) -> bool {
        self == Self::Read
    }
}

/// Observable lifecycle state of a form session.
///
/// A rejected save returns to `Editing` with the error held in
/// [`FormController::last_error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Unopened,
    Populating,
    Editing,
    Validating,
    Saved,
    Closed,
}

/// What a save attempt did, so the surface knows whether to dismiss.
#[derive(Debug, PartialEq)]
pub enum SaveOutcome {
    /// The record validated; the completion callback has fired. Dismiss.
    Saved,
    /// Validation failed; the form is editable again. Stay open.
    Rejected(ValidationError),
    /// Save is not available (read-only form or already dismissed).
    Ignored,
}

/// The capability surface a concrete form supplies to the generic
/// controller.
pub trait FormSpec {
    /// The record type this form edits.
    type Record: Record + 'static;

    /// The declarative binding table for the record's string attributes.
    fn bindings() -> &'static [FieldBinding<Self::Record>];

    /// The form's text controls and commit bar.
    fn controls(&self) -> &ControlSet;

    /// The form's text controls and commit bar, mutably.
    fn controls_mut(&mut self) -> &mut ControlSet;

    /// Populates non-string controls from an existing record (selectors,
    /// formatted timestamps). Not called in create mode.
    fn set_fields(&mut self, record: &Self::Record, read_only: bool);

    /// Commits non-string controls back into the record: selected ids
    /// (0 when nothing is selected), parsed values. May fail validation,
    /// e.g. on an unparseable timestamp.
    fn apply_other_fields(&mut self, record: &mut Self::Record) -> Result<(), ValidationError>;

    /// Where the form's visual definition lives.
    fn definition(&self) -> &'static str;

    /// Preferred modal window size.
    fn geometry(&self) -> Geometry;
}

type Completion<T> = Box<dyn FnOnce(Option<T>)>;

/// Drives one form session over a [`FormSpec`].
///
/// Construction takes everything except the surface (record, mode, title,
/// completion callback); [`open`](Self::open) consumes the controller, so a
/// session cannot be reopened. The completion callback is a single-use
/// token: it is taken out of its slot on first fire, making a second fire
/// impossible no matter how many dismissal paths run.
pub struct FormController<S: FormSpec> {
    spec: S,
    title: String,
    record: Option<S::Record>,
    mode: Mode,
    read_only: bool,
    state: FormState,
    bound: Vec<BoundField<S::Record>>,
    on_complete: Option<Completion<S::Record>>,
    last_error: Option<ValidationError>,
}

impl<S: FormSpec> FormController<S> {
    /// Creates an unopened controller for one session.
    pub fn new(
        spec: S,
        title: impl Into<String>,
        record: S::Record,
        mode: Mode,
        on_complete: impl FnOnce(Option<S::Record>) + 'static,
    ) -> Self {
        Self {
            spec,
            title: title.into(),
            record: Some(record),
            mode,
            read_only: mode.is_read_only(),
            state: FormState::Unopened,
            bound: Vec::new(),
            on_complete: Some(Box::new(on_complete)),
            last_error: None,
        }
    }

    /// Opens the form on the given surface and blocks until it is dismissed.
    ///
    /// Populates the form (outside create mode), shows the modal surface,
    /// and guarantees the completion callback has fired exactly once by the
    /// time this returns: with the record if a save succeeded, with `None`
    /// on cancel, window close, or surface failure.
    pub fn open(mut self, surface: &mut impl Surface<S>) {
        self.state = FormState::Populating;

        let (bound, errors) = binding::resolve(S::bindings(), self.spec.controls());
        for err in &errors {
            warn!(
                attribute = err.attribute,
                control = %err.control,
                "field binding skipped"
            );
        }
        self.bound = bound;

        // The id is informational: shown when persisted, never editable.
        let record_id = self.record.as_ref().map(Record::id).unwrap_or(0);
        if let Some(field) = self.spec.controls_mut().get_mut("id_field") {
            if record_id != 0 {
                field.set_text(record_id.to_string());
            }
            field.set_editable(false);
        }

        if self.mode != Mode::Create {
            if let Some(record) = self.record.as_ref() {
                self.spec.set_fields(record, self.read_only);
                binding::push_record_to_form(
                    record,
                    &self.bound,
                    self.spec.controls_mut(),
                    self.read_only,
                );
            }
        }
        if self.read_only {
            let controls = self.spec.controls_mut();
            controls.set_all_editable(false);
            controls.commit_bar_mut().set_visible(false);
        }
        self.state = FormState::Editing;

        let request = ShowRequest {
            definition: self.spec.definition(),
            geometry: self.spec.geometry(),
            title: self.title.clone(),
        };
        if let Err(err) = surface.show(request, &mut self) {
            error!(error = %err, "form surface failed; treating as cancel");
        }
        self.finish();
    }

    /// Attempts to save: pulls the form into the record, validates, and on
    /// success fires the completion callback with the record.
    ///
    /// On validation failure the record keeps the attempted values, the
    /// commit bar is re-enabled, and the session stays in `Editing`.
    pub fn save(&mut self) -> SaveOutcome {
        if self.read_only || self.is_dismissed() {
            return SaveOutcome::Ignored;
        }
        self.state = FormState::Validating;
        self.spec.controls_mut().commit_bar_mut().set_enabled(false);

        let Some(record) = self.record.as_mut() else {
            return SaveOutcome::Ignored;
        };
        binding::pull_form_to_record(record, &self.bound, self.spec.controls());
        let applied = self
            .spec
            .apply_other_fields(record)
            .and_then(|()| record.validate());

        match applied {
            Ok(()) => {
                self.last_error = None;
                if let Some(on_complete) = self.on_complete.take() {
                    on_complete(self.record.take());
                }
                self.state = FormState::Saved;
                SaveOutcome::Saved
            }
            Err(err) => {
                self.last_error = Some(err.clone());
                self.spec.controls_mut().commit_bar_mut().set_enabled(true);
                self.state = FormState::Editing;
                SaveOutcome::Rejected(err)
            }
        }
    }

    /// Cancels the session: fires the completion callback with `None` and
    /// closes. Safe to call from both a cancel button and a window-close
    /// hook; after the first dismissal it is a no-op.
    pub fn cancel(&mut self) {
        if self.is_dismissed() {
            return;
        }
        if let Some(on_complete) = self.on_complete.take() {
            on_complete(None);
        }
        self.state = FormState::Closed;
    }

    /// Returns `true` once the session has been saved or closed.
    pub fn is_dismissed(&self) -> bool {
        matches!(self.state, FormState::Saved | FormState::Closed)
    }

    /// Current lifecycle state.
    pub fn state(&self) -> FormState {
        self.state
    }

    /// The mode this session was opened with.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns `true` for an inspect-only session.
    pub fn read_only(&self) -> bool {
        self.read_only
    }

    /// The mode-derived window title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The most recent validation failure, for in-form display.
    pub fn last_error(&self) -> Option<&ValidationError> {
        self.last_error.as_ref()
    }

    /// The record being edited; `None` once ownership has passed to the
    /// completion callback.
    pub fn record(&self) -> Option<&S::Record> {
        self.record.as_ref()
    }

    /// The concrete form behind this session.
    pub fn spec(&self) -> &S {
        &self.spec
    }

    /// The concrete form behind this session, mutably.
    pub fn spec_mut(&mut self) -> &mut S {
        &mut self.spec
    }

    /// Convenience access to the form's controls.
    pub fn controls(&self) -> &ControlSet {
        self.spec.controls()
    }

    /// Convenience access to the form's controls, mutably.
    pub fn controls_mut(&mut self) -> &mut ControlSet {
        self.spec.controls_mut()
    }

    /// Fires the completion callback with `None` if it has not fired yet,
    /// then closes. Covers window-manager dismissal and surface failure.
    fn finish(&mut self) {
        if let Some(on_complete) = self.on_complete.take() {
            on_complete(None);
        }
        self.state = FormState::Closed;
    }
}
