//! Per-kind learner response stores.
//!
//! Every catalog id is present from construction with an empty value, so a
//! missing response is an empty value, never an absent key. Stores record
//! responses only; correctness is judged by the evaluators.

use crate::catalog::Catalog;
use crate::error::{EngineError, Result};
use crate::types::ExerciseKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Selected option per quiz question, plus the submitted flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResponses {
    selected: BTreeMap<u32, Option<usize>>,
    submitted: bool,
}

impl QuizResponses {
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            selected: catalog.quiz().iter().map(|item| (item.id, None)).collect(),
            submitted: false,
        }
    }

    /// Replace the selection for one question.
    pub fn select(&mut self, catalog: &Catalog, id: u32, option_index: usize) -> Result<()> {
        let item = catalog.quiz_item(id).ok_or_else(|| EngineError::UnknownItem {
            kind: ExerciseKind::Quiz,
            id: id.to_string(),
        })?;
        if option_index >= item.options.len() {
            return Err(EngineError::InvalidOption {
                id,
                index: option_index,
                options: item.options.len(),
            });
        }
        self.selected.insert(id, Some(option_index));
        Ok(())
    }

    pub fn selection(&self, id: u32) -> Option<usize> {
        self.selected.get(&id).copied().flatten()
    }

    /// Number of questions with a selection.
    pub fn answered(&self) -> usize {
        self.selected.values().filter(|v| v.is_some()).count()
    }

    pub fn submit(&mut self) {
        self.submitted = true;
    }

    pub fn submitted(&self) -> bool {
        self.submitted
    }

    /// Clear all selections and the submitted flag.
    pub fn reset(&mut self) {
        for value in self.selected.values_mut() {
            *value = None;
        }
        self.submitted = false;
    }
}

/// Typed text per blank, plus the checked flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlankResponses {
    typed: BTreeMap<String, String>,
    checked: bool,
}

impl BlankResponses {
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            typed: catalog
                .blanks()
                .iter()
                .map(|item| (item.id.clone(), String::new()))
                .collect(),
            checked: false,
        }
    }

    /// Replace the typed text for one blank. Text is stored raw;
    /// normalization happens at evaluation time.
    pub fn fill(&mut self, catalog: &Catalog, id: &str, text: String) -> Result<()> {
        if catalog.blank_item(id).is_none() {
            return Err(EngineError::UnknownItem {
                kind: ExerciseKind::FillBlank,
                id: id.to_string(),
            });
        }
        self.typed.insert(id.to_string(), text);
        Ok(())
    }

    /// The raw typed text, empty if nothing has been typed.
    pub fn text(&self, id: &str) -> &str {
        self.typed.get(id).map(String::as_str).unwrap_or("")
    }

    /// Number of blanks with non-whitespace text.
    pub fn answered(&self) -> usize {
        self.typed
            .values()
            .filter(|text| !text.trim().is_empty())
            .count()
    }

    pub fn check(&mut self) {
        self.checked = true;
    }

    pub fn checked(&self) -> bool {
        self.checked
    }

    /// Clear all typed text and the checked flag.
    pub fn reset(&mut self) {
        for value in self.typed.values_mut() {
            value.clear();
        }
        self.checked = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;

    #[test]
    fn test_quiz_select_and_replace() {
        let catalog = content::llm_basics();
        let mut responses = QuizResponses::new(&catalog);
        assert_eq!(responses.selection(1), None);

        responses.select(&catalog, 1, 0).unwrap();
        responses.select(&catalog, 1, 2).unwrap();
        assert_eq!(responses.selection(1), Some(2));
        assert_eq!(responses.answered(), 1);
    }

    #[test]
    fn test_quiz_unknown_item_rejected() {
        let catalog = content::llm_basics();
        let mut responses = QuizResponses::new(&catalog);
        let err = responses.select(&catalog, 99, 0).unwrap_err();
        assert!(matches!(err, EngineError::UnknownItem { .. }));
    }

    #[test]
    fn test_quiz_invalid_option_rejected() {
        let catalog = content::llm_basics();
        let mut responses = QuizResponses::new(&catalog);
        let err = responses.select(&catalog, 1, 4).unwrap_err();
        assert!(matches!(err, EngineError::InvalidOption { index: 4, .. }));
    }

    #[test]
    fn test_quiz_reset() {
        let catalog = content::llm_basics();
        let mut responses = QuizResponses::new(&catalog);
        responses.select(&catalog, 1, 0).unwrap();
        responses.submit();

        responses.reset();
        assert_eq!(responses.answered(), 0);
        assert!(!responses.submitted());
        assert_eq!(responses.selection(1), None);
    }

    #[test]
    fn test_blank_fill_and_reset() {
        let catalog = content::llm_basics();
        let mut responses = BlankResponses::new(&catalog);
        assert_eq!(responses.text("fb1"), "");

        responses.fill(&catalog, "fb1", "token".to_string()).unwrap();
        assert_eq!(responses.text("fb1"), "token");
        assert_eq!(responses.answered(), 1);

        responses.check();
        responses.reset();
        assert_eq!(responses.text("fb1"), "");
        assert!(!responses.checked());
    }

    #[test]
    fn test_blank_whitespace_not_answered() {
        let catalog = content::llm_basics();
        let mut responses = BlankResponses::new(&catalog);
        responses.fill(&catalog, "fb1", "   ".to_string()).unwrap();
        assert_eq!(responses.answered(), 0);
    }

    #[test]
    fn test_blank_unknown_item_rejected() {
        let catalog = content::llm_basics();
        let mut responses = BlankResponses::new(&catalog);
        let err = responses
            .fill(&catalog, "nope", "x".to_string())
            .unwrap_err();
        assert!(matches!(err, EngineError::UnknownItem { .. }));
    }
}
