//! # The Store
//!
//! Owns the canonical todo list. The list changes only through [`Store::create`],
//! [`Store::update`], [`Store::toggle_complete`] and [`Store::delete`].
//!
//! ## Change Propagation
//!
//! Every mutation that actually changes the list runs the same commit step:
//!
//! 1. the registered observer (if any) is called with the full list,
//! 2. the full list is handed to the [`Persistence`] backend.
//!
//! Operations that change nothing (blank text, unknown id) skip both steps.
//!
//! There is exactly one observer slot. [`Store::subscribe`] replaces whatever was
//! registered before and immediately calls the new observer with the current list.
//! Fan-out to several listeners is the observer's business, not the store's.
//!
//! ## Error Policy
//!
//! Nothing here returns an error. Invalid input and unknown ids are ignored, and
//! persistence failures are logged and dropped: the in-memory list stays
//! authoritative for the session, and whatever was not saved is lost on the next
//! start.
//!
//! ## Ids
//!
//! Ids come from a high-water mark initialised to `max(id) + 1` (0 for an empty
//! list) and bumped on every create. Deleting the newest todo does not lower it.

use crate::model::{is_valid_text, seed_todos, Todo, TodoId};
use crate::persistence::Persistence;
use tracing::{debug, warn};

/// Callback invoked with the full list after every change.
pub type Observer = Box<dyn FnMut(&[Todo])>;

/// The canonical todo list, its id counter and its one observer.
pub struct Store<P: Persistence> {
    todos: Vec<Todo>,
    /// `None` once the id space is used up.
    next_id: Option<TodoId>,
    observer: Option<Observer>,
    persistence: P,
}

impl<P: Persistence> Store<P> {
    /// Builds a store from whatever `persistence` has saved.
    ///
    /// With nothing saved the list starts empty, or with the example todos when
    /// `seed` is set. A failed load is logged and treated as nothing saved, but
    /// never seeds.
    pub fn load(persistence: P, seed: bool) -> Self {
        let todos = match persistence.load() {
            Ok(Some(todos)) => {
                debug!(count = todos.len(), "loaded saved todos");
                todos
            }
            Ok(None) if seed => {
                debug!("no saved todos, seeding examples");
                seed_todos()
            }
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(error = %err, "could not load saved todos, starting empty");
                Vec::new()
            }
        };
        Self::with_todos(persistence, todos)
    }

    /// Builds a store around an explicit list, ignoring anything saved.
    pub fn with_todos(persistence: P, todos: Vec<Todo>) -> Self {
        let next_id = match todos.iter().map(|t| t.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(0),
        };
        if next_id.is_none() {
            warn!("highest todo id is already at the limit, new todos will be refused");
        }
        Self {
            todos,
            next_id,
            observer: None,
            persistence,
        }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// The id the next `create` will assign, `None` when ids have run out.
    pub fn next_id(&self) -> Option<TodoId> {
        self.next_id
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    /// Registers the single observer, replacing any previous one, and calls it
    /// right away with the current list.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&[Todo]) + 'static,
    {
        if self.observer.is_some() {
            debug!("replacing store observer");
        }
        let mut observer: Observer = Box::new(observer);
        observer(&self.todos);
        self.observer = Some(observer);
    }

    /// Appends a todo. Returns the new id, or `None` when `text` is blank.
    pub fn create(&mut self, text: &str) -> Option<TodoId> {
        if !is_valid_text(text) {
            debug!("ignoring create with blank text");
            return None;
        }
        let Some(id) = self.next_id else {
            warn!("no todo ids left, ignoring create");
            return None;
        };
        self.next_id = id.checked_add(1);
        self.todos.push(Todo::new(id, text));
        debug!(id, "created todo");
        self.commit();
        Some(id)
    }

    /// Replaces the text of `id` in place. Returns whether anything changed.
    pub fn update(&mut self, id: TodoId, text: &str) -> bool {
        if !is_valid_text(text) {
            debug!(id, "ignoring update with blank text");
            return false;
        }
        let Some(todo) = self.todos.iter_mut().find(|t| t.id == id) else {
            debug!(id, "ignoring update of unknown todo");
            return false;
        };
        *todo = todo.with_text(text);
        debug!(id, "updated todo");
        self.commit();
        true
    }

    /// Flips completion of `id`. Returns whether anything changed.
    pub fn toggle_complete(&mut self, id: TodoId) -> bool {
        let Some(todo) = self.todos.iter_mut().find(|t| t.id == id) else {
            debug!(id, "ignoring toggle of unknown todo");
            return false;
        };
        *todo = todo.toggled();
        debug!(id, complete = todo.complete, "toggled todo");
        self.commit();
        true
    }

    /// Removes `id`. Returns whether anything changed.
    pub fn delete(&mut self, id: TodoId) -> bool {
        let before = self.todos.len();
        self.todos.retain(|t| t.id != id);
        if self.todos.len() == before {
            debug!(id, "ignoring delete of unknown todo");
            return false;
        }
        debug!(id, "deleted todo");
        self.commit();
        true
    }

    fn commit(&mut self) {
        if let Some(observer) = self.observer.as_mut() {
            observer(&self.todos);
        }
        if let Err(err) = self.persistence.save(&self.todos) {
            warn!(error = %err, count = self.todos.len(), "could not save todos");
        }
    }
}
