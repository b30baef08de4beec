use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{QuestionId, Step};
use crate::model::question::Question;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionSetError {
    #[error("question id {got} out of sequence, expected {expected}")]
    OutOfSequence { expected: QuestionId, got: QuestionId },
}

/// Ordered, append-only list of questions.
///
/// Question `k` (1-based) always carries id `k`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    /// Build a set from an initial list.
    ///
    /// # Errors
    ///
    /// Returns `QuestionSetError::OutOfSequence` if ids are not `1..=n`.
    pub fn from_questions(
        questions: impl IntoIterator<Item = Question>,
    ) -> Result<Self, QuestionSetError> {
        let mut set = Self::default();
        for question in questions {
            set.push(question)?;
        }
        Ok(set)
    }

    /// Append a question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionSetError::OutOfSequence` unless the id is `len + 1`.
    pub fn push(&mut self, question: Question) -> Result<(), QuestionSetError> {
        let expected = self.next_id();
        if question.id() != expected {
            return Err(QuestionSetError::OutOfSequence {
                expected,
                got: question.id(),
            });
        }
        self.questions.push(question);
        Ok(())
    }

    #[must_use]
    pub fn next_id(&self) -> QuestionId {
        QuestionId::after(self.questions.len())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// The question shown at `step`, `None` on the welcome card or past the end.
    #[must_use]
    pub fn at_step(&self, step: Step) -> Option<&Question> {
        step.question_index()
            .and_then(|index| self.questions.get(index))
    }

    /// The step showing the last question; welcome when empty.
    #[must_use]
    pub fn last_step(&self) -> Step {
        Step::new(self.questions.len())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}
