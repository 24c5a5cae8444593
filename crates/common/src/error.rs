//! Unified error type for the impact model.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    #[error("Division by zero: {0} is zero")]
    DivisionByZero(&'static str),

    #[error("Config error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
