use crate::error::{Result, TodoError};
use crate::persistence::fs::DEFAULT_DATA_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LINE_WIDTH: usize = 80;

/// Configuration for todolist, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoConfig {
    /// Name of the snapshot file inside the data directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Start with example todos when nothing has been saved yet
    #[serde(default)]
    pub seed_examples: bool,

    /// Terminal width used to fit long todo texts
    #[serde(default = "default_line_width")]
    pub line_width: usize,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_line_width() -> usize {
    DEFAULT_LINE_WIDTH
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            seed_examples: false,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl TodoConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TodoError::Io)?;
        let config: TodoConfig = serde_json::from_str(&content).map_err(|e| {
            TodoError::Config(format!("{}: {}", config_path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TodoError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TodoError::Serialization)?;
        fs::write(config_path, content).map_err(TodoError::Io)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        let name = self.data_file.trim();
        if name.is_empty() || name.contains(['/', '\\']) || name == CONFIG_FILENAME {
            return Err(TodoError::Config(format!(
                "data_file must be a plain file name other than {}, got {:?}",
                CONFIG_FILENAME, self.data_file
            )));
        }
        Ok(())
    }
}
