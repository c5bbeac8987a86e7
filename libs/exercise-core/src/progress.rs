//! Completion percentage, independent of correctness.

use crate::catalog::Catalog;
use crate::response::{BlankResponses, QuizResponses};

/// `round(100 * answered / total)` as a 0-100 percentage.
pub fn percentage(answered: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((answered as f64 / total as f64) * 100.0).round() as u8
}

/// Fraction of quiz questions with a selected option.
pub fn quiz_progress(catalog: &Catalog, responses: &QuizResponses) -> u8 {
    percentage(responses.answered(), catalog.quiz().len())
}

/// Fraction of blanks with non-whitespace text.
pub fn blank_progress(catalog: &Catalog, responses: &BlankResponses) -> u8 {
    percentage(responses.answered(), catalog.blanks().len())
}
