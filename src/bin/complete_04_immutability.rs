//! Immutability with copy: states are never edited in place. Each change
//! produces a new state, which makes an undo/redo history trivial.
//!
//! Run with: cargo run --bin complete_04_immutability

use colored::Colorize;

#[derive(Debug, Clone, PartialEq)]
pub struct CodeEditorState {
    content: String,
    cursor_position: usize,
    unsaved_changes: bool,
}

/// Fields left as `None` are copied from the current state.
#[derive(Debug, Default)]
pub struct StatePatch {
    pub content: Option<String>,
    pub cursor_position: Option<usize>,
    pub unsaved_changes: Option<bool>,
}

impl CodeEditorState {
    pub fn new(content: impl Into<String>, cursor_position: usize, unsaved_changes: bool) -> Self {
        Self {
            content: content.into(),
            cursor_position,
            unsaved_changes,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    pub fn unsaved_changes(&self) -> bool {
        self.unsaved_changes
    }

    #[must_use]
    pub fn copy_with(&self, patch: StatePatch) -> Self {
        Self {
            content: patch.content.unwrap_or_else(|| self.content.clone()),
            cursor_position: patch.cursor_position.unwrap_or(self.cursor_position),
            unsaved_changes: patch.unsaved_changes.unwrap_or(self.unsaved_changes),
        }
    }

    pub fn display_state(&self) -> String {
        format!(
            "    Content: {}\n    Cursor Position: {}\n    Unsaved Changes: {}",
            self.content, self.cursor_position, self.unsaved_changes
        )
    }
}

// =============================================================================
// History
// =============================================================================

#[derive(Debug, Default)]
pub struct CodeEditorHistory {
    history: Vec<CodeEditorState>,
    current: Option<usize>,
}

impl CodeEditorHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Saving after an undo discards the states that could have been redone.
    pub fn save(&mut self, state: CodeEditorState) {
        let keep = self.current.map_or(0, |i| i + 1);
        self.history.truncate(keep);
        self.history.push(state);
        self.current = Some(self.history.len() - 1);
    }

    pub fn undo(&mut self) -> Option<&CodeEditorState> {
        match self.current {
            Some(i) if i > 0 => {
                self.current = Some(i - 1);
                self.history.get(i - 1)
            }
            _ => None,
        }
    }

    pub fn redo(&mut self) -> Option<&CodeEditorState> {
        match self.current {
            Some(i) if i + 1 < self.history.len() => {
                self.current = Some(i + 1);
                self.history.get(i + 1)
            }
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }
}

fn print_state(label: &str, state: &CodeEditorState) {
    println!("{}", label.blue());
    println!("{}", "Code Editor State:".green());
    println!("{}\n", state.display_state());
}

fn main() {
    let mut history = CodeEditorHistory::new();

    let mut state = CodeEditorState::new(r#"println!("Hello, world!");"#, 2, false);
    history.save(state.clone());
    print_state("Initial state:", &state);

    state = state.copy_with(StatePatch {
        content: Some(r#"println!("Hello, world! Updated");"#.to_string()),
        cursor_position: Some(3),
        unsaved_changes: Some(true),
    });
    history.save(state.clone());
    print_state("Updated state:", &state);

    state = state.copy_with(StatePatch {
        cursor_position: Some(5),
        ..Default::default()
    });
    history.save(state.clone());
    print_state("Updated cursor position state:", &state);

    if let Some(previous) = history.undo() {
        print_state("After undo state:", previous);
    }

    if let Some(next) = history.redo() {
        print_state("After redo state:", next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> CodeEditorState {
        CodeEditorState::new("a", 0, false)
    }

    #[test]
    fn test_copy_with_keeps_original() {
        let original = base();
        let updated = original.copy_with(StatePatch {
            cursor_position: Some(4),
            ..Default::default()
        });

        assert_eq!(original.cursor_position(), 0);
        assert_eq!(updated.cursor_position(), 4);
        assert_eq!(updated.content(), "a");
        assert!(!updated.unsaved_changes());
    }

    #[test]
    fn test_undo_redo() {
        let mut history = CodeEditorHistory::new();
        let s1 = base();
        let s2 = s1.copy_with(StatePatch {
            content: Some("b".into()),
            ..Default::default()
        });
        history.save(s1.clone());
        history.save(s2.clone());

        assert_eq!(history.undo(), Some(&s1));
        assert_eq!(history.undo(), None);
        assert_eq!(history.redo(), Some(&s2));
        assert_eq!(history.redo(), None);
    }

    #[test]
    fn test_save_after_undo_drops_redo_tail() {
        let mut history = CodeEditorHistory::new();
        let states: Vec<CodeEditorState> = (0..3).map(|i| CodeEditorState::new("x", i, false)).collect();
        for s in &states {
            history.save(s.clone());
        }

        history.undo();
        history.undo();
        let branch = CodeEditorState::new("y", 9, true);
        history.save(branch.clone());

        assert_eq!(history.len(), 2);
        assert_eq!(history.redo(), None);
        assert_eq!(history.undo(), Some(&states[0]));
    }

    #[test]
    fn test_empty_history() {
        let mut history = CodeEditorHistory::new();
        assert_eq!(history.undo(), None);
        assert_eq!(history.redo(), None);
    }
}
