//! Display/edit state machine for one text field.

/// Keyboard signals relevant to an editing field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    Enter { shift: bool },
    Escape,
    Other,
}

/// Result of feeding a key to an [`EditableField`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Editing ended by submit; carries the update to propagate, if any.
    Committed(Option<String>),
    /// Editing ended by cancel; nothing propagates.
    Cancelled,
    /// Key does not end editing.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Mode {
    Display,
    Editing { draft: String },
}

/// One editable scalar. Holds only the draft; the committed value stays with
/// its owner and is passed in on every transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditableField {
    mode: Mode,
    multiline: bool,
}

impl EditableField {
    pub fn single_line() -> Self {
        Self {
            mode: Mode::Display,
            multiline: false,
        }
    }

    /// Multi-line fields never submit on Enter.
    pub fn multiline() -> Self {
        Self {
            mode: Mode::Display,
            multiline: true,
        }
    }

    /// Runs one full begin/type/confirm cycle on a single-line field.
    ///
    /// Used by non-interactive callers that receive the final text at once.
    pub fn edit_once(committed: &str, text: &str) -> Option<String> {
        let mut field = Self::single_line();
        field.begin_edit(committed);
        field.set_draft(text);
        field.commit(committed)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, Mode::Editing { .. })
    }

    pub fn draft(&self) -> Option<&str> {
        match &self.mode {
            Mode::Editing { draft } => Some(draft.as_str()),
            Mode::Display => None,
        }
    }

    /// Enters edit mode with the draft seeded from `current`.
    ///
    /// Re-entering while already editing keeps the existing draft.
    pub fn begin_edit(&mut self, current: &str) {
        if !self.is_editing() {
            self.mode = Mode::Editing {
                draft: current.to_string(),
            };
        }
    }

    /// Replaces the draft text. Ignored outside edit mode.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        if let Mode::Editing { draft } = &mut self.mode {
            *draft = text.into();
        }
    }

    /// Confirms the draft (focus loss or submit) and returns to display mode.
    ///
    /// Returns the trimmed draft only when it differs from the trimmed
    /// `committed` value.
    pub fn commit(&mut self, committed: &str) -> Option<String> {
        let Mode::Editing { draft } = std::mem::replace(&mut self.mode, Mode::Display) else {
            return None;
        };
        let trimmed = draft.trim();
        if trimmed == committed.trim() {
            return None;
        }
        Some(trimmed.to_string())
    }

    /// Discards the draft and returns to display mode.
    pub fn cancel(&mut self) {
        self.mode = Mode::Display;
    }

    pub fn handle_key(&mut self, key: EditKey, committed: &str) -> KeyOutcome {
        if !self.is_editing() {
            return KeyOutcome::Ignored;
        }
        match key {
            EditKey::Enter { shift: false } if !self.multiline => {
                KeyOutcome::Committed(self.commit(committed))
            }
            EditKey::Escape => {
                self.cancel();
                KeyOutcome::Cancelled
            }
            _ => KeyOutcome::Ignored,
        }
    }
}

impl Default for EditableField {
    fn default() -> Self {
        Self::single_line()
    }
}

#[cfg(test)]
mod tests {
    use super::{EditKey, EditableField, KeyOutcome};

    #[test]
    fn begin_edit_seeds_draft_from_current_value() {
        let mut field = EditableField::single_line();
        assert_eq!(field.draft(), None);
        field.begin_edit("Ada");
        assert_eq!(field.draft(), Some("Ada"));
    }

    #[test]
    fn commit_trims_and_propagates_changes() {
        let mut field = EditableField::single_line();
        field.begin_edit("Ada");
        field.set_draft("  Grace  ");
        assert_eq!(field.commit("Ada").as_deref(), Some("Grace"));
        assert!(!field.is_editing());
    }

    #[test]
    fn commit_of_same_trimmed_value_is_noop() {
        let mut field = EditableField::single_line();
        field.begin_edit("Ada");
        field.set_draft("Ada   ");
        assert_eq!(field.commit("Ada"), None);
        assert!(!field.is_editing());
    }

    #[test]
    fn commit_outside_edit_mode_is_noop() {
        let mut field = EditableField::single_line();
        assert_eq!(field.commit("Ada"), None);
    }

    #[test]
    fn edit_once_applies_commit_rules() {
        assert_eq!(EditableField::edit_once("Ada", " Ada "), None);
        assert_eq!(
            EditableField::edit_once("Ada", " Grace ").as_deref(),
            Some("Grace")
        );
        assert_eq!(EditableField::edit_once("Ada", "  ").as_deref(), Some(""));
    }

    #[test]
    fn escape_discards_draft() {
        let mut field = EditableField::single_line();
        field.begin_edit("Ada");
        field.set_draft("Grace");
        assert_eq!(field.handle_key(EditKey::Escape, "Ada"), KeyOutcome::Cancelled);
        assert!(!field.is_editing());
        field.begin_edit("Ada");
        assert_eq!(field.draft(), Some("Ada"));
    }

    #[test]
    fn enter_submits_single_line_only() {
        let mut single = EditableField::single_line();
        single.begin_edit("a");
        single.set_draft("b");
        assert_eq!(
            single.handle_key(EditKey::Enter { shift: false }, "a"),
            KeyOutcome::Committed(Some("b".to_string()))
        );

        let mut shifted = EditableField::single_line();
        shifted.begin_edit("a");
        assert_eq!(
            shifted.handle_key(EditKey::Enter { shift: true }, "a"),
            KeyOutcome::Ignored
        );
        assert!(shifted.is_editing());

        let mut multi = EditableField::multiline();
        multi.begin_edit("a");
        assert_eq!(
            multi.handle_key(EditKey::Enter { shift: false }, "a"),
            KeyOutcome::Ignored
        );
        assert!(multi.is_editing());
    }
}
