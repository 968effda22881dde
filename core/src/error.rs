use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid game result: {0}")]
    InvalidGameResult(String),

    #[error("Invalid practice: {0}")]
    InvalidPractice(String),

    #[error("Invalid schedule event: {0}")]
    InvalidSchedule(String),

    #[error("{kind} with ID {id} not found")]
    NotFound { kind: &'static str, id: String },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

pub type EngineResult<T> = std::result::Result<T, EngineError>;
