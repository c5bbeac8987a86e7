//! Pure evaluators for the graded exercise kinds.
//!
//! Flashcards are self-assessed and have no evaluator.

use crate::catalog::Catalog;
use crate::response::{BlankResponses, QuizResponses};
use crate::types::EvaluationResult;
use std::collections::BTreeMap;

/// Trim and lowercase. The only normalization applied to typed answers;
/// no punctuation stripping, no synonym matching.
pub fn normalize_answer(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Grade every quiz question against the current selections.
///
/// A question with no selection counts as incorrect. Pure and idempotent:
/// the result is a function of the inputs only.
pub fn evaluate_quiz(catalog: &Catalog, responses: &QuizResponses) -> EvaluationResult<u32> {
    let mut per_item = BTreeMap::new();
    let mut total_correct = 0;
    for item in catalog.quiz() {
        let correct = responses.selection(item.id) == Some(item.correct_index);
        if correct {
            total_correct += 1;
        }
        per_item.insert(item.id, correct);
    }
    EvaluationResult {
        per_item,
        total_correct,
        total: catalog.quiz().len(),
    }
}

/// Grade every blank against the normalized expected answer.
pub fn evaluate_blanks(catalog: &Catalog, responses: &BlankResponses) -> EvaluationResult<String> {
    let mut per_item = BTreeMap::new();
    let mut total_correct = 0;
    for item in catalog.blanks() {
        let correct =
            normalize_answer(responses.text(&item.id)) == normalize_answer(&item.expected_answer);
        if correct {
            total_correct += 1;
        }
        per_item.insert(item.id.clone(), correct);
    }
    EvaluationResult {
        per_item,
        total_correct,
        total: catalog.blanks().len(),
    }
}
