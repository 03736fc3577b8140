use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("last room must be the finish room, found: {0}")]
    InvalidTerminalStage(String),

    #[error("{0} search produced no candidates")]
    EmptySearchResult(&'static str),

    #[error("unknown room: {0}")]
    UnknownStage(String),

    #[error("expected {expected} rooms, got {found}")]
    InvalidSequenceLength { expected: usize, found: usize },

    #[error("room '{0}' appears more than once; each room must be unique")]
    DuplicateStage(String),

    #[error("invalid timing table: {0}")]
    InvalidTimingTable(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CalcError>;
