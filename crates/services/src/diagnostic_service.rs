use std::sync::Arc;

use diagnostic_core::engine::{AnswerOutcome, DiagnosticEngine};
use diagnostic_core::model::{
    COMPLETED_SENTINEL, Category, KEY_COMPLETED, KEY_RESULT, KEY_TITLE, SessionRecord,
};
use storage::repository::SessionStateRepository;

use crate::error::DiagnosticError;

/// Result of answering a single question in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosticAnswerResult {
    pub is_complete: bool,
    pub winner: Option<Category>,
}

/// Orchestrates the quiz engine against the injected session store.
#[derive(Clone)]
pub struct DiagnosticService {
    store: Arc<dyn SessionStateRepository>,
}

impl DiagnosticService {
    #[must_use]
    pub fn new(store: Arc<dyn SessionStateRepository>) -> Self {
        Self { store }
    }

    /// The read-once startup check for a prior completed run.
    ///
    /// Returns the stored winning category when the record validates.
    /// Invalid or partial data, and storage failures, are all treated as an
    /// absent record: the run then begins fresh at the intro screen. Nothing
    /// here is surfaced to the user.
    pub async fn resume(&self) -> Option<Category> {
        let read = async {
            let completed = self.store.get(KEY_COMPLETED).await?;
            let title = self.store.get(KEY_TITLE).await?;
            let result = self.store.get(KEY_RESULT).await?;
            Ok::<_, storage::repository::StorageError>((completed, title, result))
        };

        match read.await {
            Ok((completed, title, result)) => SessionRecord::from_persisted(
                completed.as_deref(),
                title.as_deref(),
                result.as_deref(),
            )
            .map(|record| record.result()),
            Err(err) => {
                eprintln!("session store read failed, starting fresh: {err}");
                None
            }
        }
    }

    /// Answer the current question, persisting the session record when the
    /// run completes.
    ///
    /// Persisting is the only side effect beyond counting; it happens exactly
    /// once per run, immediately after the winner is computed.
    ///
    /// # Errors
    ///
    /// Returns `DiagnosticError::Engine` if no run is in progress, or
    /// `DiagnosticError::Storage` if the completed record cannot be written.
    pub async fn answer_current(
        &self,
        engine: &mut DiagnosticEngine,
        category: Category,
    ) -> Result<DiagnosticAnswerResult, DiagnosticError> {
        match engine.answer(category)? {
            AnswerOutcome::Continue => Ok(DiagnosticAnswerResult {
                is_complete: false,
                winner: None,
            }),
            AnswerOutcome::Completed(winner) => {
                self.write_record(&SessionRecord::completed(winner)).await?;
                Ok(DiagnosticAnswerResult {
                    is_complete: true,
                    winner: Some(winner),
                })
            }
        }
    }

    async fn write_record(&self, record: &SessionRecord) -> Result<(), DiagnosticError> {
        self.store.put(KEY_COMPLETED, COMPLETED_SENTINEL).await?;
        self.store.put(KEY_TITLE, record.title()).await?;
        self.store.put(KEY_RESULT, record.result().label()).await?;
        Ok(())
    }
}
