use diagnostic_core::engine::{DiagnosticEngine, RunPhase};
use diagnostic_core::model::{Category, Question};
use services::{DiagnosticAnswerResult, DiagnosticService};

use crate::views::ViewError;

/// Which of the three screens the flow is on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Intro,
    Quiz,
    Result,
}

/// Drives the intro → quiz → result flow over the diagnostic engine.
///
/// Plain struct, testable without a running DOM; views clone it, apply an
/// intent, and write the updated copy back into their signal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticVm {
    engine: DiagnosticEngine,
}

impl DiagnosticVm {
    /// A fresh flow starting at the intro screen.
    #[must_use]
    pub fn new() -> Self {
        Self {
            engine: DiagnosticEngine::new(),
        }
    }

    /// A flow restored from a validated stored session: straight to the
    /// result screen, intro and quiz never shown.
    #[must_use]
    pub fn resumed(result: Category) -> Self {
        let mut engine = DiagnosticEngine::new();
        engine.resume(result);
        Self { engine }
    }

    #[must_use]
    pub fn step(&self) -> Step {
        match self.engine.phase() {
            RunPhase::Intro => Step::Intro,
            RunPhase::InProgress => Step::Quiz,
            RunPhase::Completed => Step::Result,
        }
    }

    /// Leave the intro screen and start the quiz.
    pub fn begin(&mut self) {
        self.engine.start();
    }

    #[must_use]
    pub fn question(&self) -> Option<&'static Question> {
        self.engine.current_question()
    }

    /// 1-based number of the question being asked, for display.
    #[must_use]
    pub fn question_number(&self) -> usize {
        self.engine.current_index() + 1
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.engine.question_count()
    }

    /// Progress through the quiz as a percentage, including the question
    /// currently on screen.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        let total = self.engine.question_count();
        if total == 0 {
            return 0.0;
        }
        (self.question_number() as f64 / total as f64) * 100.0
    }

    #[must_use]
    pub fn result(&self) -> Option<Category> {
        self.engine.result()
    }

    /// Answer the current question through the service, which persists the
    /// session record when this was the final question.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Unknown` for engine or storage failures.
    pub async fn answer(
        &mut self,
        service: &DiagnosticService,
        category: Category,
    ) -> Result<DiagnosticAnswerResult, ViewError> {
        service
            .answer_current(&mut self.engine, category)
            .await
            .map_err(|_| ViewError::Unknown)
    }
}

impl Default for DiagnosticVm {
    fn default() -> Self {
        Self::new()
    }
}
