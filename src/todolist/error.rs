use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("{0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, TodoError>;
