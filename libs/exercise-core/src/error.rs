//! Error types for exercise-core.

use crate::types::ExerciseKind;
use thiserror::Error;

/// Result type alias using EngineError.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors from catalog construction and session operations.
///
/// "Not yet evaluated" is not an error; evaluation accessors return
/// `Option::None` before submission instead.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("duplicate {kind} item id {id}")]
    DuplicateItem { kind: ExerciseKind, id: String },

    #[error("quiz item {id}: needs at least 2 options, got {options}")]
    TooFewOptions { id: u32, options: usize },

    #[error("quiz item {id}: correct index {index} out of range for {options} options")]
    InvalidAnswerIndex { id: u32, index: usize, options: usize },

    #[error("blank item {id}: expected exactly one placeholder, found {found}")]
    BadTemplate { id: String, found: usize },

    #[error("catalog has no {0} items")]
    EmptyCatalog(ExerciseKind),

    #[error("unknown {kind} item id {id}")]
    UnknownItem { kind: ExerciseKind, id: String },

    #[error("quiz item {id}: option index {index} out of range for {options} options")]
    InvalidOption { id: u32, index: usize, options: usize },
}
