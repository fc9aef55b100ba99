use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiscographError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Song not found: {0}")]
    SongNotFound(i32),

    #[error("Seed error: {0}")]
    Seed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DiscographError>;
