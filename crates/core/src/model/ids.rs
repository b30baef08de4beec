use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a Question
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestionId(u64);

impl QuestionId {
    /// Creates a new `QuestionId`
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the underlying u64 value
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }

    /// The id assigned to the question appended after `len` existing ones.
    #[must_use]
    pub fn after(len: usize) -> Self {
        Self(len as u64 + 1)
    }
}

/// Position in the wizard.
///
/// `Step::WELCOME` (0) is the welcome card; step `k >= 1` shows the k-th
/// question of the set.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Step(usize);

impl Step {
    pub const WELCOME: Step = Step(0);

    #[must_use]
    pub const fn new(step: usize) -> Self {
        Self(step)
    }

    #[must_use]
    pub const fn value(self) -> usize {
        self.0
    }

    #[must_use]
    pub const fn is_welcome(self) -> bool {
        self.0 == 0
    }

    /// Zero-based index into the question set, `None` on the welcome card.
    #[must_use]
    pub const fn question_index(self) -> Option<usize> {
        match self.0 {
            0 => None,
            n => Some(n - 1),
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}

impl fmt::Debug for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuestionId({})", self.0)
    }
}

impl fmt::Debug for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step({})", self.0)
    }
}

// ─── Display Implementations ───────────────────────────────────────────────────

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
