use std::path::PathBuf;

/// Contract violations reported by the rules engine.
///
/// Expected outcomes (no path, no run, no free cell for a spawn) are never
/// errors; they come back as `Option`s, empty collections or outcome enums.
#[derive(Debug, thiserror::Error)]
pub enum LinesError {
    #[error("position ({row}, {col}) is outside a {size}x{size} board")]
    OutOfBounds { row: u8, col: u8, size: u8 },

    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: u8, col: u8 },

    #[error("cell ({row}, {col}) is empty")]
    CellEmpty { row: u8, col: u8 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LinesError>;
