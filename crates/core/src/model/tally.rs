use serde::{Deserialize, Serialize};

use crate::model::Category;

/// Per-category running count of answers for one diagnostic run.
///
/// Counters are stored in `Category::ALL` order in a fixed-size array, never
/// a hash map: iteration order encodes the tie-break rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTally([u32; Category::ALL.len()]);

impl ScoreTally {
    /// A fresh all-zero tally.
    #[must_use]
    pub const fn new() -> Self {
        Self([0; Category::ALL.len()])
    }

    /// Record one answer voting for `category`.
    pub fn record(&mut self, category: Category) {
        self.0[category.index()] = self.0[category.index()].saturating_add(1);
    }

    /// Count recorded for a single category.
    #[must_use]
    pub fn count(&self, category: Category) -> u32 {
        self.0[category.index()]
    }

    /// Total answers recorded so far.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Determine the winning category.
    ///
    /// Scans categories in `Category::ALL` order with a running maximum
    /// initialized below any possible count, replacing the leader only on a
    /// strictly greater count. On a tie the first category in enumeration
    /// order among the tied set wins; this is a behavioral contract, not an
    /// accident. Always returns a category, even for an all-zero tally.
    #[must_use]
    pub fn winner(&self) -> Category {
        let mut max = -1_i64;
        let mut leader = Category::Process;
        for cat in Category::ALL {
            let count = i64::from(self.count(cat));
            if count > max {
                max = count;
                leader = cat;
            }
        }
        leader
    }
}
