use alloc::string::String;
use thiserror::Error;

/// Failure to obtain a usable question set from the data source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("Could not fetch question set: {0}")]
    Fetch(String),
    #[error("Malformed question set payload: {0}")]
    Malformed(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("No categories available to start a round")]
    InsufficientCategories,
    #[error("No question matches {category} for {value}")]
    NoMatch { category: String, value: String },
    #[error("Question set is empty")]
    EmptyQuestionSet,
    #[error("No question set loaded")]
    NoQuestionSet,
    #[error("No round in progress")]
    NoRound,
    #[error("A question set is still loading")]
    LoadPending,
    #[error("Cell is outside the board")]
    InvalidCell,
    #[error("Unknown question set: {0}")]
    UnknownQuestionSet(String),
}

pub type Result<T> = core::result::Result<T, GameError>;
