use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Unknown action type: {0}")]
    UnknownAction(String),

    #[error("'{0}' is not a canonical hand label")]
    InvalidHandLabel(String),
}
