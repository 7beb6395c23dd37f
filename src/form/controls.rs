//! Bindable control primitives backed by the external widget toolkit.
//!
//! The toolkit itself is out of scope; these structs are the crate's view of
//! a control: a named text container, a named selectable list, and the
//! save/cancel button group. A real shell mirrors their state into widgets.

/// A named single-line text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    name: &'static str,
    text: String,
    editable: bool,
}

impl TextField {
    /// Creates an empty, editable text field.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            text: String::new(),
            editable: true,
        }
    }

    /// Returns the control name used for binding resolution.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the current text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Clears the current text.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Returns `true` if the user may edit the field.
    pub fn editable(&self) -> bool {
        self.editable
    }

    /// Sets whether the user may edit the field.
    pub fn set_editable(&mut self, editable: bool) {
        self.editable = editable;
    }
}

/// A named selectable list (combo box).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectBox<T> {
    name: &'static str,
    items: Vec<T>,
    selected: Option<usize>,
    enabled: bool,
}

impl<T> SelectBox<T> {
    /// Creates an empty, enabled select box.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            items: Vec::new(),
            selected: None,
            enabled: true,
        }
    }

    /// Returns the control name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the candidate list.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Replaces the candidate list. Any prior selection is cleared.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.selected = None;
    }

    /// Selects the candidate at `index`; returns `false` if out of bounds.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.items.len() {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }

    /// Selects the first candidate matching the predicate; returns `false`
    /// if none matches.
    pub fn select_by(&mut self, pred: impl Fn(&T) -> bool) -> bool {
        match self.items.iter().position(pred) {
            Some(index) => {
                self.selected = Some(index);
                true
            }
            None => false,
        }
    }

    /// Returns the selected candidate, if any.
    pub fn selected(&self) -> Option<&T> {
        self.selected.and_then(|i| self.items.get(i))
    }

    /// Returns the selected index, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Clears the selection without touching the candidate list.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Returns `true` if the user may change the selection.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Sets whether the user may change the selection.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

/// The form's save/cancel button group, treated as one unit.
///
/// Hidden entirely in read mode; disabled while a save is validating so a
/// second click cannot submit twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitBar {
    visible: bool,
    enabled: bool,
}

impl Default for CommitBar {
    fn default() -> Self {
        Self {
            visible: true,
            enabled: true,
        }
    }
}

impl CommitBar {
    /// Returns `true` if the bar is shown at all.
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Shows or hides the bar.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Returns `true` if the buttons accept clicks.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables the buttons.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

/// The ordered, name-addressed set of text controls on a form, plus its
/// commit bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlSet {
    fields: Vec<TextField>,
    commit: CommitBar,
}

impl ControlSet {
    /// Creates a control set with one empty text field per name, in order.
    pub fn new(names: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            fields: names.into_iter().map(TextField::new).collect(),
            commit: CommitBar::default(),
        }
    }

    /// Returns the field with the given name.
    pub fn get(&self, name: &str) -> Option<&TextField> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// Returns the field with the given name, mutably.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut TextField> {
        self.fields.iter_mut().find(|f| f.name() == name)
    }

    /// Returns the text of the named field, or an empty string if absent.
    pub fn text(&self, name: &str) -> &str {
        self.get(name).map(TextField::text).unwrap_or("")
    }

    /// Returns all fields in declaration order.
    pub fn fields(&self) -> &[TextField] {
        &self.fields
    }

    /// Sets every field's editable flag at once.
    pub fn set_all_editable(&mut self, editable: bool) {
        for field in &mut self.fields {
            field.set_editable(editable);
        }
    }

    /// Returns the commit bar.
    pub fn commit_bar(&self) -> &CommitBar {
        &self.commit
    }

    /// Returns the commit bar, mutably.
    pub fn commit_bar_mut(&mut self) -> &mut CommitBar {
        &mut self.commit
    }

    pub(crate) fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name() == name)
    }

    pub(crate) fn by_index(&self, index: usize) -> &TextField {
        &self.fields[index]
    }

    pub(crate) fn by_index_mut(&mut self, index: usize) -> &mut TextField {
        &mut self.fields[index]
    }
}
