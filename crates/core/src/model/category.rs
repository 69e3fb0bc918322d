use std::fmt;

use serde::{Deserialize, Serialize};

/// The three fixed bottleneck classifications a diagnostic run can produce.
///
/// The declaration order is load-bearing: `ScoreTally::winner` scans
/// categories in `Category::ALL` order and the first category among a tied
/// set wins. Reordering the variants changes diagnostic results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Process,
    Role,
    Visibility,
}

impl Category {
    /// All categories in canonical enumeration order.
    pub const ALL: [Category; 3] = [Category::Process, Category::Role, Category::Visibility];

    /// Human-readable label, also used verbatim as the persisted value.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Process => "Process Bottleneck",
            Category::Role => "Role & Ownership Bottleneck",
            Category::Visibility => "Performance Visibility Bottleneck",
        }
    }

    /// Canned explanatory paragraph shown on the result screen.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Category::Process => {
                "Your operations are suffering from friction in workflow mechanics rather than \
                 personnel capability. Handoffs, approval chains, or manual redundancies are \
                 likely the root cause."
            }
            Category::Role => {
                "Ambiguity in responsibility is creating execution gaps. Your team is likely \
                 talented but hampered by unclear swim lanes or decision-making authority."
            }
            Category::Visibility => {
                "You are flying blind regarding the leading indicators of success. Problems are \
                 likely only visible when they become emergencies, preventing proactive \
                 management."
            }
        }
    }

    /// Parse a persisted label back into a category.
    ///
    /// Returns `None` for anything outside the fixed label set; callers treat
    /// that as an absent record rather than an error.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Category::ALL.into_iter().find(|cat| cat.label() == label)
    }

    /// Zero-based position in the canonical enumeration order.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for cat in Category::ALL {
            assert_eq!(Category::from_label(cat.label()), Some(cat));
        }
    }

    #[test]
    fn unknown_label_is_rejected() {
        assert_eq!(Category::from_label("Nonexistent"), None);
        assert_eq!(Category::from_label(""), None);
        assert_eq!(Category::from_label("process bottleneck"), None);
    }

    #[test]
    fn enumeration_order_is_fixed() {
        assert_eq!(
            Category::ALL,
            [Category::Process, Category::Role, Category::Visibility]
        );
        assert_eq!(Category::Process.index(), 0);
        assert_eq!(Category::Visibility.index(), 2);
    }
}
