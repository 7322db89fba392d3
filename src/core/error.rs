use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrapaError {
    #[error("Unknown shape: {0}")]
    UnknownShape(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Room code must not be empty")]
    EmptyRoomCode,

    #[error("Board is locked: {0}")]
    BoardLocked(String),

    #[error("Layout is not legal: {0}")]
    IllegalLayout(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, OrapaError>;
