//! Learner session facade driven by the presentation layer.

use crate::catalog::Catalog;
use crate::content;
use crate::error::Result;
use crate::evaluate::{evaluate_blanks, evaluate_quiz};
use crate::navigator::CardNavigator;
use crate::progress;
use crate::response::{BlankResponses, QuizResponses};
use crate::types::{
    BlankItem, EvaluationResult, ExerciseKind, FlashcardItem, NavigatorState, QuizItem,
};
use tracing::debug;

/// One learner's session over a catalog.
///
/// Owns all mutable exercise state; exactly one session exists per learner.
/// Every operation is a synchronous, total state transition, so the type is
/// plain owned data with no interior locking.
#[derive(Debug, Clone)]
pub struct ExerciseSession {
    catalog: Catalog,
    quiz: QuizResponses,
    blanks: BlankResponses,
    navigator: CardNavigator,
}

impl Default for ExerciseSession {
    /// Session over the built-in "LLMs 101" content set.
    fn default() -> Self {
        Self::new(content::llm_basics())
    }
}

impl ExerciseSession {
    pub fn new(catalog: Catalog) -> Self {
        let quiz = QuizResponses::new(&catalog);
        let blanks = BlankResponses::new(&catalog);
        let navigator = CardNavigator::new(catalog.flashcards().len());
        Self {
            catalog,
            quiz,
            blanks,
            navigator,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn quiz_items(&self) -> &[QuizItem] {
        self.catalog.quiz()
    }

    pub fn flashcards(&self) -> &[FlashcardItem] {
        self.catalog.flashcards()
    }

    pub fn blank_items(&self) -> &[BlankItem] {
        self.catalog.blanks()
    }

    /// Record the learner's option selection for one quiz question.
    pub fn select_option(&mut self, item_id: u32, option_index: usize) -> Result<()> {
        self.quiz.select(&self.catalog, item_id, option_index)
    }

    /// Record the learner's typed text for one blank.
    pub fn fill_blank(&mut self, item_id: &str, text: impl Into<String>) -> Result<()> {
        self.blanks.fill(&self.catalog, item_id, text.into())
    }

    pub fn selection(&self, item_id: u32) -> Option<usize> {
        self.quiz.selection(item_id)
    }

    pub fn typed_answer(&self, item_id: &str) -> &str {
        self.blanks.text(item_id)
    }

    /// Mark the quiz submitted; selections stay editable and the score
    /// recomputes from whatever is currently selected.
    pub fn submit_quiz(&mut self) {
        debug!(kind = %ExerciseKind::Quiz, "exercise submitted");
        self.quiz.submit();
    }

    /// Mark the blanks checked; same semantics as [`submit_quiz`].
    ///
    /// [`submit_quiz`]: Self::submit_quiz
    pub fn check_blanks(&mut self) {
        debug!(kind = %ExerciseKind::FillBlank, "exercise submitted");
        self.blanks.check();
    }

    /// `None` until [`submit_quiz`](Self::submit_quiz) has been called.
    pub fn quiz_evaluation(&self) -> Option<EvaluationResult<u32>> {
        self.quiz
            .submitted()
            .then(|| evaluate_quiz(&self.catalog, &self.quiz))
    }

    /// `None` until [`check_blanks`](Self::check_blanks) has been called.
    pub fn blank_evaluation(&self) -> Option<EvaluationResult<String>> {
        self.blanks
            .checked()
            .then(|| evaluate_blanks(&self.catalog, &self.blanks))
    }

    pub fn quiz_progress(&self) -> u8 {
        progress::quiz_progress(&self.catalog, &self.quiz)
    }

    pub fn blank_progress(&self) -> u8 {
        progress::blank_progress(&self.catalog, &self.blanks)
    }

    /// Completion percentage for kinds that track responses. Flashcards are
    /// self-assessed and report `None`.
    pub fn progress(&self, kind: ExerciseKind) -> Option<u8> {
        match kind {
            ExerciseKind::Quiz => Some(self.quiz_progress()),
            ExerciseKind::FillBlank => Some(self.blank_progress()),
            ExerciseKind::Flashcards => None,
        }
    }

    /// Restart one exercise: responses (and the evaluated flag) are cleared;
    /// for flashcards the cursor returns to the first card, hidden.
    pub fn reset(&mut self, kind: ExerciseKind) {
        debug!(kind = %kind, "exercise reset");
        match kind {
            ExerciseKind::Quiz => self.quiz.reset(),
            ExerciseKind::FillBlank => self.blanks.reset(),
            ExerciseKind::Flashcards => self.navigator.reset(),
        }
    }

    /// The card under the cursor.
    pub fn card(&self) -> &FlashcardItem {
        &self.catalog.flashcards()[self.navigator.index()]
    }

    /// 1-based position and total, for the "n / N" label.
    pub fn card_position(&self) -> (usize, usize) {
        (self.navigator.index() + 1, self.catalog.flashcards().len())
    }

    pub fn navigator(&self) -> NavigatorState {
        self.navigator.state()
    }

    pub fn next_card(&mut self) {
        self.navigator.next();
    }

    pub fn prev_card(&mut self) {
        self.navigator.prev();
    }

    pub fn toggle_reveal(&mut self) {
        self.navigator.toggle_reveal();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_evaluation_gated_on_submit() {
        let mut session = ExerciseSession::default();
        // Select the correct answer; still not evaluated until submit.
        session.select_option(1, 1).unwrap();
        assert!(session.quiz_evaluation().is_none());

        session.submit_quiz();
        let result = session.quiz_evaluation().unwrap();
        assert!(result.per_item[&1]);
        assert_eq!(result.total, 5);
    }

    #[test]
    fn test_quiz_scenario_three_of_five() {
        let mut session = ExerciseSession::default();

        let items: Vec<(u32, usize, usize)> = session
            .quiz_items()
            .iter()
            .map(|item| (item.id, item.correct_index, item.options.len()))
            .collect();
        for (id, correct_index, _) in items.iter().take(3) {
            session.select_option(*id, *correct_index).unwrap();
        }
        for (id, correct_index, options) in items.iter().skip(3) {
            session
                .select_option(*id, (correct_index + 1) % options)
                .unwrap();
        }
        session.submit_quiz();

        let result = session.quiz_evaluation().unwrap();
        assert_eq!(result.total_correct, 3);
        assert_eq!(result.total, 5);
    }

    #[test]
    fn test_blank_check_and_normalization() {
        let mut session = ExerciseSession::default();
        session.fill_blank("fb1", "  Token ").unwrap();
        session.fill_blank("fb2", "Attention").unwrap();
        session.fill_blank("fb3", "contexts").unwrap();
        assert!(session.blank_evaluation().is_none());

        session.check_blanks();
        let result = session.blank_evaluation().unwrap();
        assert_eq!(result.total_correct, 2);
        assert!(result.per_item["fb1"]);
        assert!(result.per_item["fb2"]);
        assert!(!result.per_item["fb3"]);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut session = ExerciseSession::default();
        session.select_option(1, 0).unwrap();
        session.submit_quiz();
        assert!(session.quiz_evaluation().is_some());
        assert!(session.quiz_progress() > 0);

        session.reset(ExerciseKind::Quiz);
        assert_eq!(session.quiz_progress(), 0);
        assert!(session.quiz_evaluation().is_none());
    }

    #[test]
    fn test_score_recomputes_after_submit() {
        let mut session = ExerciseSession::default();
        session.submit_quiz();
        assert_eq!(session.quiz_evaluation().unwrap().total_correct, 0);

        // Selections stay editable after submit.
        session.select_option(1, 1).unwrap();
        assert_eq!(session.quiz_evaluation().unwrap().total_correct, 1);
    }

    #[test]
    fn test_progress_by_kind() {
        let mut session = ExerciseSession::default();
        assert_eq!(session.progress(ExerciseKind::Quiz), Some(0));
        assert_eq!(session.progress(ExerciseKind::Flashcards), None);

        session.fill_blank("fb1", "token").unwrap();
        assert_eq!(session.progress(ExerciseKind::FillBlank), Some(33));
    }

    #[test]
    fn test_flashcard_navigation() {
        let mut session = ExerciseSession::default();
        assert_eq!(session.card_position(), (1, 5));
        assert_eq!(session.card().front, "LLM (what it does)");

        session.prev_card();
        assert_eq!(session.card_position(), (5, 5));
        assert_eq!(session.card().front, "RAG vs MCP");

        session.toggle_reveal();
        assert!(session.navigator().revealed);

        session.reset(ExerciseKind::Flashcards);
        assert_eq!(
            session.navigator(),
            NavigatorState { index: 0, revealed: false }
        );
    }

    #[test]
    fn test_unknown_ids_surface_errors() {
        let mut session = ExerciseSession::default();
        assert!(session.select_option(42, 0).is_err());
        assert!(session.fill_blank("fb9", "x").is_err());
        // Failed calls leave state untouched.
        assert_eq!(session.quiz_progress(), 0);
        assert_eq!(session.blank_progress(), 0);
    }
}
