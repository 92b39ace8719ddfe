use crate::model::{Todo, TodoId};
use serde::Serialize;

pub const TITLE: &str = "Todos";
pub const INPUT_PLACEHOLDER: &str = "Add todo";
pub const SUBMIT_LABEL: &str = "Submit";
pub const EMPTY_MESSAGE: &str = "Nothing to do. Add a task?";
pub const DELETE_LABEL: &str = "Delete";

/// What a presenter shows for one list, before any styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Screen {
    pub title: String,
    pub placeholder: String,
    pub submit_label: String,
    /// Set exactly when `rows` is empty.
    pub empty_message: Option<String>,
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub id: TodoId,
    /// Checkbox state; completed text is also drawn struck through.
    pub complete: bool,
    pub text: String,
    pub delete_label: String,
}

impl Screen {
    pub fn build(todos: &[Todo]) -> Self {
        let rows: Vec<Row> = todos.iter().map(Row::from).collect();
        let empty_message = rows.is_empty().then(|| EMPTY_MESSAGE.to_string());
        Self {
            title: TITLE.to_string(),
            placeholder: INPUT_PLACEHOLDER.to_string(),
            submit_label: SUBMIT_LABEL.to_string(),
            empty_message,
            rows,
        }
    }
}

impl From<&Todo> for Row {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id,
            complete: todo.complete,
            text: todo.text.clone(),
            delete_label: DELETE_LABEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_shows_message_only() {
        let screen = Screen::build(&[]);
        assert!(screen.rows.is_empty());
        assert_eq!(screen.empty_message.as_deref(), Some(EMPTY_MESSAGE));
        assert_eq!(screen.title, TITLE);
    }

    #[test]
    fn one_row_per_todo_in_order() {
        let todos = vec![Todo::new(4, "b").toggled(), Todo::new(2, "a")];
        let screen = Screen::build(&todos);

        assert!(screen.empty_message.is_none());
        let ids: Vec<_> = screen.rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![4, 2]);
        assert!(screen.rows[0].complete);
        assert!(!screen.rows[1].complete);
        assert_eq!(screen.rows[1].delete_label, DELETE_LABEL);
    }

    #[test]
    fn building_twice_is_identical() {
        let todos = vec![Todo::new(0, "same")];
        assert_eq!(Screen::build(&todos), Screen::build(&todos));
    }
}
