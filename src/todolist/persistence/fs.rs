use super::Persistence;
use crate::error::{Result, TodoError};
use crate::model::Todo;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_DATA_FILE: &str = "todos.json";

pub struct FileStore {
    root: PathBuf,
    file_name: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            file_name: DEFAULT_DATA_FILE.to_string(),
        }
    }

    pub fn with_file_name(mut self, name: &str) -> Self {
        self.file_name = name.to_string();
        self
    }

    pub fn data_path(&self) -> PathBuf {
        self.root.join(&self.file_name)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(TodoError::Io)?;
        }
        Ok(())
    }
}

impl Persistence for FileStore {
    fn load(&self) -> Result<Option<Vec<Todo>>> {
        let data_file = self.data_path();
        if !data_file.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(data_file).map_err(TodoError::Io)?;
        let todos: Vec<Todo> =
            serde_json::from_str(&content).map_err(TodoError::Serialization)?;
        Ok(Some(todos))
    }

    fn save(&mut self, todos: &[Todo]) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(todos).map_err(TodoError::Serialization)?;
        fs::write(self.data_path(), content).map_err(TodoError::Io)?;
        Ok(())
    }
}
