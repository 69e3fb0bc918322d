use serde::{Deserialize, Serialize};

use crate::model::Category;

/// Storage key for the completion flag.
pub const KEY_COMPLETED: &str = "completed";
/// Storage key for the diagnostic title.
pub const KEY_TITLE: &str = "title";
/// Storage key for the winning category label.
pub const KEY_RESULT: &str = "result";

/// Sentinel value marking a completed run.
pub const COMPLETED_SENTINEL: &str = "true";

/// Fixed diagnostic name persisted alongside the result.
pub const DIAGNOSTIC_TITLE: &str = "Manager’s Bottleneck Diagnostic";

/// The persisted outcome of a completed diagnostic run.
///
/// Written exactly once, when a run completes; read exactly once, at startup,
/// to resume directly to the result screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    title: String,
    result: Category,
}

impl SessionRecord {
    /// Build the record for a freshly completed run.
    #[must_use]
    pub fn completed(result: Category) -> Self {
        Self {
            title: DIAGNOSTIC_TITLE.to_string(),
            result,
        }
    }

    /// Rehydrate from raw persisted fields.
    ///
    /// Returns `None` unless the completion flag equals the sentinel and the
    /// result parses as a known category label. Invalid or partial data is
    /// treated as an absent record, never as an error.
    #[must_use]
    pub fn from_persisted(
        completed: Option<&str>,
        title: Option<&str>,
        result: Option<&str>,
    ) -> Option<Self> {
        if completed? != COMPLETED_SENTINEL {
            return None;
        }
        let result = Category::from_label(result?)?;
        Some(Self {
            title: title.unwrap_or(DIAGNOSTIC_TITLE).to_string(),
            result,
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn result(&self) -> Category {
        self.result
    }
}
