//! Placeholder question synthesis.
//!
//! New questions are not derived from earlier answers; they only exist so the
//! wizard can keep going past the seed questions.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::{Question, QuestionId, QuestionKind};

pub const PLACEHOLDER_OPTIONS: [&str; 3] = ["Option 1", "Option 2", "Option 3"];

/// Which kind of placeholder to synthesize.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyntheticKind {
    Options,
    Text,
}

/// Produces the question appended when the wizard runs past its last one.
pub trait QuestionGenerator {
    fn generate(&mut self, id: QuestionId) -> Question;
}

/// The placeholder question for `id`.
#[must_use]
pub fn placeholder_question(id: QuestionId, kind: SyntheticKind) -> Question {
    let title = format!("Generated question {id}");
    let kind = match kind {
        SyntheticKind::Options => {
            QuestionKind::Options(PLACEHOLDER_OPTIONS.map(str::to_string).to_vec())
        }
        SyntheticKind::Text => QuestionKind::Text,
    };
    Question::from_trusted(id, [title.as_str(), "part 2"], kind)
}

/// Picks the kind with a fair coin.
pub struct RandomQuestionGenerator {
    rng: StdRng,
}

impl RandomQuestionGenerator {
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence of kinds for a given seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl QuestionGenerator for RandomQuestionGenerator {
    fn generate(&mut self, id: QuestionId) -> Question {
        let kind = if self.rng.random_bool(0.5) {
            SyntheticKind::Options
        } else {
            SyntheticKind::Text
        };
        tracing::trace!(question = %id, ?kind, "synthesized question kind");
        placeholder_question(id, kind)
    }
}

/// Replays a fixed list of kinds, wrapping around. An empty script yields text questions.
#[derive(Clone, Debug)]
pub struct ScriptedQuestionGenerator {
    script: Vec<SyntheticKind>,
    cursor: usize,
}

impl ScriptedQuestionGenerator {
    #[must_use]
    pub fn new(script: impl IntoIterator<Item = SyntheticKind>) -> Self {
        Self {
            script: script.into_iter().collect(),
            cursor: 0,
        }
    }

    #[must_use]
    pub fn always(kind: SyntheticKind) -> Self {
        Self::new([kind])
    }
}

impl QuestionGenerator for ScriptedQuestionGenerator {
    fn generate(&mut self, id: QuestionId) -> Question {
        let kind = if self.script.is_empty() {
            SyntheticKind::Text
        } else {
            let kind = self.script[self.cursor % self.script.len()];
            self.cursor += 1;
            kind
        };
        placeholder_question(id, kind)
    }
}
