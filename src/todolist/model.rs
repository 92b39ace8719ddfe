use serde::{Deserialize, Serialize};

pub type TodoId = u64;

/// A single task record.
///
/// Field names double as the snapshot format, so renaming them breaks
/// previously saved lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
    pub complete: bool,
}

impl Todo {
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            complete: false,
        }
    }

    /// Copy with the text replaced, keeping id and completion.
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            id: self.id,
            text: text.into(),
            complete: self.complete,
        }
    }

    /// Copy with completion flipped.
    pub fn toggled(&self) -> Self {
        Self {
            id: self.id,
            text: self.text.clone(),
            complete: !self.complete,
        }
    }
}

/// Returns true when `text` is acceptable as todo text.
pub fn is_valid_text(text: &str) -> bool {
    !text.trim().is_empty()
}

/// The examples a fresh list may start with.
pub fn seed_todos() -> Vec<Todo> {
    vec![
        Todo::new(1, "Learn 10 new words"),
        Todo::new(2, "Translate a song"),
    ]
}
