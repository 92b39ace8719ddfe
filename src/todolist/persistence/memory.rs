use super::Persistence;
use crate::error::{Result, TodoError};
use crate::model::Todo;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    snapshot: Option<Vec<Todo>>,
    saves: usize,
    failing: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(todos: Vec<Todo>) -> Self {
        Self {
            snapshot: Some(todos),
            ..Self::default()
        }
    }

    /// Makes every subsequent `load` and `save` fail.
    pub fn fail(mut self) -> Self {
        self.failing = true;
        self
    }

    pub fn snapshot(&self) -> Option<&[Todo]> {
        self.snapshot.as_deref()
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }

    fn unavailable() -> TodoError {
        TodoError::Io(std::io::Error::other("storage unavailable"))
    }
}

impl Persistence for InMemoryStore {
    fn load(&self) -> Result<Option<Vec<Todo>>> {
        if self.failing {
            return Err(Self::unavailable());
        }
        Ok(self.snapshot.clone())
    }

    fn save(&mut self, todos: &[Todo]) -> Result<()> {
        if self.failing {
            return Err(Self::unavailable());
        }
        self.snapshot = Some(todos.to_vec());
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::store::Store;

    pub struct StoreFixture {
        todos: Vec<Todo>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self { todos: Vec::new() }
        }

        pub fn with_todos(mut self, count: usize) -> Self {
            for _ in 0..count {
                let id = self.next_id();
                self.todos.push(Todo::new(id, format!("Task {}", id)));
            }
            self
        }

        pub fn with_todo(mut self, text: &str) -> Self {
            let id = self.next_id();
            self.todos.push(Todo::new(id, text));
            self
        }

        pub fn with_complete_todo(mut self, text: &str) -> Self {
            let id = self.next_id();
            self.todos.push(Todo::new(id, text).toggled());
            self
        }

        pub fn build(self) -> Store<InMemoryStore> {
            Store::load(InMemoryStore::with_snapshot(self.todos), false)
        }

        fn next_id(&self) -> u64 {
            self.todos.last().map(|t| t.id + 1).unwrap_or(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_absent() {
        let store = InMemoryStore::new();
        assert!(store.load().unwrap().is_none());
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn save_replaces_snapshot() {
        let mut store = InMemoryStore::new();
        store.save(&[Todo::new(0, "a")]).unwrap();
        store.save(&[Todo::new(1, "b")]).unwrap();
        assert_eq!(store.snapshot().unwrap(), &[Todo::new(1, "b")]);
        assert_eq!(store.save_count(), 2);
    }

    #[test]
    fn failing_store_errors() {
        let mut store = InMemoryStore::new().fail();
        assert!(store.load().is_err());
        assert!(store.save(&[]).is_err());
        assert_eq!(store.save_count(), 0);
    }
}
