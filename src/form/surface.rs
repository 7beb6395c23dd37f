//! The modal window contract the lifecycle controller opens forms on.

use thiserror::Error;

use super::controller::{FormController, FormSpec};

/// Preferred modal window size, supplied by the concrete form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub width: u32,
    pub height: u32,
}

/// Everything a surface needs to show a form: the location of its visual
/// definition, the window size, and the mode-derived title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowRequest {
    pub definition: &'static str,
    pub geometry: Geometry,
    pub title: String,
}

/// Errors a surface can report from [`Surface::show`].
///
/// The controller never propagates these to the caller; a failed show is
/// logged and treated as a cancel so the completion callback always fires.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// The form's visual definition could not be located or loaded.
    #[error("form definition not found: {0}")]
    MissingDefinition(String),

    /// An I/O error occurred while loading the definition.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A modal window that hosts one form session.
///
/// `show` blocks until the user dismisses the window. While it runs, the
/// surface drives the session through the controller's public methods:
/// mirroring control state into widgets, forwarding edits back, and calling
/// [`FormController::save`] / [`FormController::cancel`] from its buttons.
/// Returning without either is a window-manager close; the controller treats
/// it as cancel.
pub trait Surface<S: FormSpec> {
    /// Shows the form and blocks until it is dismissed.
    fn show(
        &mut self,
        request: ShowRequest,
        form: &mut FormController<S>,
    ) -> Result<(), SurfaceError>;
}
