//! Core types for the exercise engine.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The three exercise kinds sharing one evaluation contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    Quiz,
    Flashcards,
    FillBlank,
}

impl fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Quiz => "quiz",
            Self::Flashcards => "flashcards",
            Self::FillBlank => "fill_blank",
        };
        write!(f, "{}", s)
    }
}

/// One multiple-choice question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizItem {
    pub id: u32,
    pub prompt: String,
    /// At least two options; order is display order.
    pub options: Vec<String>,
    /// Index into `options` of the correct answer.
    pub correct_index: usize,
    /// Shown to the learner after submission.
    pub explanation: String,
}

/// One flip card. Sequence order is navigation order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashcardItem {
    pub front: String,
    pub back: String,
}

/// One fill-in-the-blank sentence.
///
/// The template contains exactly one placeholder: a maximal run of three or
/// more underscores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlankItem {
    pub id: String,
    pub template: String,
    pub expected_answer: String,
}

/// Per-item correctness plus the aggregate score for one exercise kind.
///
/// Derived on demand from the catalog and the current responses, never
/// stored alongside them. Covers every catalog item exactly once; an
/// unanswered item is marked incorrect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult<K: Ord> {
    pub per_item: BTreeMap<K, bool>,
    pub total_correct: usize,
    pub total: usize,
}

/// Snapshot of the flashcard cursor, for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigatorState {
    pub index: usize,
    pub revealed: bool,
}
