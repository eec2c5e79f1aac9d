use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrayError {
    #[error("Invalid tray size: {value}")]
    InvalidSize { value: String },

    #[error("Slot count mismatch: expected {expected} slots, got {actual}")]
    SlotCountMismatch { expected: usize, actual: usize },

    #[error("Slot index {index} out of range for tray with capacity {capacity}")]
    IndexOutOfRange { index: usize, capacity: usize },

    #[error("Slot {index} is already occupied")]
    SlotOccupied { index: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Seed file parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, TrayError>;
