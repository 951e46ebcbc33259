//! Single-row edit-mode tracking.

/// Tracks which row of a collection, if any, is open for inline editing.
///
/// At most one row per collection is editable at a time: starting an edit on
/// another row replaces the selection, and rows render read-only whenever
/// their id is not the selected one. This is per-session screen state, not
/// part of the data model, so it is deliberately not serializable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditSelection<Id> {
    editing: Option<Id>,
}

impl<Id> EditSelection<Id> {
    pub fn new() -> Self {
        Self { editing: None }
    }

    /// Leave edit mode. Edits are applied live, so there is nothing to
    /// commit here; saving only closes the row.
    pub fn save(&mut self) {
        self.editing = None;
    }
}

impl<Id: Copy + Eq> EditSelection<Id> {
    /// Open `id` for editing, replacing any previous selection.
    pub fn start(&mut self, id: Id) {
        self.editing = Some(id);
    }

    pub fn editing(&self) -> Option<Id> {
        self.editing
    }

    pub fn is_editing(&self, id: Id) -> bool {
        self.editing == Some(id)
    }
}

impl<Id> Default for EditSelection<Id> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_an_edit_replaces_the_selection() {
        let mut selection = EditSelection::new();
        selection.start(1u64);
        selection.start(2u64);

        assert!(selection.is_editing(2));
        assert!(!selection.is_editing(1));
        assert_eq!(selection.editing(), Some(2));
    }

    #[test]
    fn save_leaves_edit_mode() {
        let mut selection = EditSelection::new();
        selection.start(5u64);
        selection.save();

        assert_eq!(selection.editing(), None);
        assert!(!selection.is_editing(5));
    }

    #[test]
    fn fresh_selection_edits_nothing() {
        let selection: EditSelection<u64> = EditSelection::new();
        assert_eq!(selection.editing(), None);
    }
}
