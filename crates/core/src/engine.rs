use thiserror::Error;

use crate::model::{Category, QUESTION_COUNT, Question, ScoreTally, question_bank};

static QUESTIONS: [Question; QUESTION_COUNT] = question_bank();

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum EngineError {
    #[error("diagnostic run is not in progress")]
    NotInProgress,
}

/// Where a diagnostic run currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Intro,
    InProgress,
    Completed,
}

/// What an accepted answer led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// More questions remain; the index has advanced.
    Continue,
    /// That was the final question; the run is complete with this winner.
    Completed(Category),
}

/// The quiz state machine: question index, score tally, and run phase.
///
/// Invariant: `tally().total()` always equals the number of answers accepted
/// so far and never exceeds `QUESTION_COUNT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticEngine {
    phase: RunPhase,
    index: usize,
    tally: ScoreTally,
    result: Option<Category>,
}

impl Default for DiagnosticEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticEngine {
    /// A fresh engine sitting at the intro screen.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: RunPhase::Intro,
            index: 0,
            tally: ScoreTally::new(),
            result: None,
        }
    }

    /// Begin (or restart) a run: first question, all-zero tally.
    pub fn start(&mut self) {
        self.phase = RunPhase::InProgress;
        self.index = 0;
        self.tally = ScoreTally::new();
        self.result = None;
    }

    /// Jump straight to a completed run, used when a validated stored session
    /// is found at startup. Bypasses `start`/`answer` entirely.
    pub fn resume(&mut self, result: Category) {
        self.phase = RunPhase::Completed;
        self.index = QUESTIONS.len().saturating_sub(1);
        self.tally = ScoreTally::new();
        self.result = Some(result);
    }

    /// Accept the answer for the current question.
    ///
    /// Increments the tally for `category`, then either advances to the next
    /// question or, on the final question, completes the run and computes the
    /// winner. Completing the run is the caller's cue to persist the session
    /// record.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::NotInProgress` unless a run is in progress.
    pub fn answer(&mut self, category: Category) -> Result<AnswerOutcome, EngineError> {
        if self.phase != RunPhase::InProgress {
            return Err(EngineError::NotInProgress);
        }

        self.tally.record(category);

        if self.index < QUESTIONS.len() - 1 {
            self.index += 1;
            return Ok(AnswerOutcome::Continue);
        }

        let winner = self.tally.winner();
        self.phase = RunPhase::Completed;
        self.result = Some(winner);
        Ok(AnswerOutcome::Completed(winner))
    }

    #[must_use]
    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    /// Zero-based index of the question currently being asked.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.index
    }

    /// The question currently being asked, if a run is in progress.
    #[must_use]
    pub fn current_question(&self) -> Option<&'static Question> {
        if self.phase == RunPhase::InProgress {
            QUESTIONS.get(self.index)
        } else {
            None
        }
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        QUESTIONS.len()
    }

    #[must_use]
    pub fn tally(&self) -> &ScoreTally {
        &self.tally
    }

    /// The winning category of a completed run.
    #[must_use]
    pub fn result(&self) -> Option<Category> {
        self.result
    }
}
