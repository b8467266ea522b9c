use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Card not found: {0}")]
    CardNotFound(String),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Duplicate column ID: {0}")]
    DuplicateColumn(String),

    #[error("Card {0} appears more than once on the board")]
    DuplicateCard(String),

    #[error("Card {card} has position {found}, expected {expected}")]
    PositionMismatch {
        card: String,
        expected: usize,
        found: usize,
    },

    #[error("Card {card} is stored in column {stored} but claims column {claimed}")]
    ColumnMismatch {
        card: String,
        stored: String,
        claimed: String,
    },

    #[error("Invalid drop target: {0}")]
    InvalidDropTarget(String),

    #[error("Board not initialized")]
    BoardNotInitialized,

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
