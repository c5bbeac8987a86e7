//! Core exercise engine shared by the learner-facing applications.
//!
//! Provides:
//! - Static content catalog with structural validation
//! - Per-kind response stores (quiz selections, typed blanks)
//! - Pure evaluators and completion-progress computation
//! - Cyclic flashcard navigator with reveal toggle
//! - `ExerciseSession`, the facade the presentation layer drives

pub mod catalog;
pub mod content;
pub mod error;
pub mod evaluate;
pub mod navigator;
pub mod progress;
pub mod response;
pub mod session;
pub mod types;

pub use catalog::{split_template, Catalog};
pub use error::{EngineError, Result};
pub use evaluate::{evaluate_blanks, evaluate_quiz, normalize_answer};
pub use navigator::CardNavigator;
pub use response::{BlankResponses, QuizResponses};
pub use session::ExerciseSession;
pub use types::{
    BlankItem, EvaluationResult, ExerciseKind, FlashcardItem, NavigatorState, QuizItem,
};
