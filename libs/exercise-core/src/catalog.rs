//! Validated, immutable exercise content.

use crate::error::{EngineError, Result};
use crate::types::{BlankItem, ExerciseKind, FlashcardItem, QuizItem};
use serde::Serialize;
use std::collections::BTreeSet;

/// The full static content set for one learner session.
///
/// Construction validates the structural invariants once; afterwards the
/// contents are exposed by reference only and never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    quiz: Vec<QuizItem>,
    flashcards: Vec<FlashcardItem>,
    blanks: Vec<BlankItem>,
}

impl Catalog {
    pub fn new(
        quiz: Vec<QuizItem>,
        flashcards: Vec<FlashcardItem>,
        blanks: Vec<BlankItem>,
    ) -> Result<Self> {
        if quiz.is_empty() {
            return Err(EngineError::EmptyCatalog(ExerciseKind::Quiz));
        }
        if flashcards.is_empty() {
            return Err(EngineError::EmptyCatalog(ExerciseKind::Flashcards));
        }
        if blanks.is_empty() {
            return Err(EngineError::EmptyCatalog(ExerciseKind::FillBlank));
        }

        let mut seen_quiz = BTreeSet::new();
        for item in &quiz {
            if !seen_quiz.insert(item.id) {
                return Err(EngineError::DuplicateItem {
                    kind: ExerciseKind::Quiz,
                    id: item.id.to_string(),
                });
            }
            if item.options.len() < 2 {
                return Err(EngineError::TooFewOptions {
                    id: item.id,
                    options: item.options.len(),
                });
            }
            if item.correct_index >= item.options.len() {
                return Err(EngineError::InvalidAnswerIndex {
                    id: item.id,
                    index: item.correct_index,
                    options: item.options.len(),
                });
            }
        }

        let mut seen_blanks = BTreeSet::new();
        for item in &blanks {
            if !seen_blanks.insert(item.id.as_str()) {
                return Err(EngineError::DuplicateItem {
                    kind: ExerciseKind::FillBlank,
                    id: item.id.clone(),
                });
            }
            let runs = placeholder_runs(&item.template);
            if runs != 1 {
                return Err(EngineError::BadTemplate {
                    id: item.id.clone(),
                    found: runs,
                });
            }
        }

        Ok(Self {
            quiz,
            flashcards,
            blanks,
        })
    }

    pub fn quiz(&self) -> &[QuizItem] {
        &self.quiz
    }

    pub fn flashcards(&self) -> &[FlashcardItem] {
        &self.flashcards
    }

    pub fn blanks(&self) -> &[BlankItem] {
        &self.blanks
    }

    pub fn quiz_item(&self, id: u32) -> Option<&QuizItem> {
        self.quiz.iter().find(|item| item.id == id)
    }

    pub fn blank_item(&self, id: &str) -> Option<&BlankItem> {
        self.blanks.iter().find(|item| item.id == id)
    }
}

/// Count maximal runs of three or more underscores.
fn placeholder_runs(template: &str) -> usize {
    let mut runs = 0;
    let mut current = 0;
    for b in template.bytes() {
        if b == b'_' {
            current += 1;
        } else {
            if current >= 3 {
                runs += 1;
            }
            current = 0;
        }
    }
    if current >= 3 {
        runs += 1;
    }
    runs
}

/// Split a template into the text before and after its placeholder run.
///
/// Returns `None` when the template has no placeholder; never `None` for a
/// template accepted by [`Catalog::new`].
pub fn split_template(template: &str) -> Option<(&str, &str)> {
    let bytes = template.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'_' {
            let start = i;
            while i < bytes.len() && bytes[i] == b'_' {
                i += 1;
            }
            if i - start >= 3 {
                // Run boundaries are ASCII, so byte slicing is char-safe.
                return Some((&template[..start], &template[i..]));
            }
        } else {
            i += 1;
        }
    }
    None
}
