//! The check-in wizard: current step, question set, and recorded answers.
//!
//! All operations complete synchronously. Stepping past the last known
//! question asks the generator for one more, so the wizard never runs out.

use std::fmt;

use thiserror::Error;

use crate::generator::{QuestionGenerator, SyntheticKind, placeholder_question};
use crate::model::{Answer, AnswerMap, Question, QuestionId, QuestionKind, QuestionSet, Step};
use crate::seed::seed_set;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WizardError {
    #[error("step {step} has no question")]
    UnknownStep { step: Step },

    #[error("step {step} expects a {expected} answer")]
    KindMismatch { step: Step, expected: &'static str },
}

//
// ─── WIZARD ────────────────────────────────────────────────────────────────────
//

/// Result of [`Wizard::advance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Advance {
    pub step: Step,
    /// Set when a synthetic question had to be appended first.
    pub appended: Option<QuestionId>,
}

pub struct Wizard {
    step: Step,
    questions: QuestionSet,
    answers: AnswerMap,
    generator: Box<dyn QuestionGenerator>,
}

impl Wizard {
    /// A fresh wizard on the welcome card with the seed questions loaded.
    #[must_use]
    pub fn new(generator: Box<dyn QuestionGenerator>) -> Self {
        Self::with_questions(seed_set(), generator)
    }

    #[must_use]
    pub fn with_questions(questions: QuestionSet, generator: Box<dyn QuestionGenerator>) -> Self {
        Self {
            step: Step::WELCOME,
            questions,
            answers: AnswerMap::new(),
            generator,
        }
    }

    #[must_use]
    pub fn step(&self) -> Step {
        self.step
    }

    #[must_use]
    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    /// The question on screen, `None` on the welcome card.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.at_step(self.step)
    }

    #[must_use]
    pub fn answer(&self, step: Step) -> Option<&Answer> {
        self.answers.get(step)
    }

    /// Move forward one step, appending a synthetic question first when the
    /// current step is the last known question.
    pub fn advance(&mut self) -> Advance {
        let mut appended = None;
        if self.step == self.questions.last_step() {
            let id = self.questions.next_id();
            let question = self.generator.generate(id);
            if let Err(err) = self.questions.push(question) {
                tracing::warn!(%err, "generator returned an out-of-sequence question");
                let fallback = self
                    .questions
                    .push(placeholder_question(id, SyntheticKind::Text));
                debug_assert!(fallback.is_ok(), "placeholder uses the next id");
            }
            tracing::debug!(question = %id, questions = self.questions.len(), "appended question");
            appended = Some(id);
        }
        self.step = self.step.next();
        tracing::debug!(step = %self.step, "advanced");
        Advance {
            step: self.step,
            appended,
        }
    }

    /// Move back one step. Returns `false` on the welcome card.
    pub fn retreat(&mut self) -> bool {
        if self.step.is_welcome() {
            return false;
        }
        self.step = self.step.prev();
        tracing::debug!(step = %self.step, "retreated");
        true
    }

    /// Toggle `option` in the answer for `step`. Any label toggles, offered
    /// or not.
    ///
    /// # Errors
    ///
    /// Returns `WizardError` if `step` has no question or the question is not
    /// multiple-choice.
    pub fn record_option(&mut self, step: Step, option: &str) -> Result<&Answer, WizardError> {
        let question = self
            .questions
            .at_step(step)
            .ok_or(WizardError::UnknownStep { step })?;
        if !question.kind().is_options() {
            return Err(WizardError::KindMismatch {
                step,
                expected: question.kind().label(),
            });
        }
        let answer = self.answers.entry_for(step, question.kind());
        answer.toggle(option);
        tracing::debug!(%step, option, selected = answer.selected().len(), "toggled option");
        Ok(&*answer)
    }

    /// Replace the text answer for `step`.
    ///
    /// # Errors
    ///
    /// Returns `WizardError` if `step` has no question or the question is
    /// multiple-choice.
    pub fn record_text(
        &mut self,
        step: Step,
        value: impl Into<String>,
    ) -> Result<&Answer, WizardError> {
        let question = self
            .questions
            .at_step(step)
            .ok_or(WizardError::UnknownStep { step })?;
        if let QuestionKind::Options(_) = question.kind() {
            return Err(WizardError::KindMismatch {
                step,
                expected: question.kind().label(),
            });
        }
        self.answers.set(step, Answer::Text(value.into()));
        self.answers
            .get(step)
            .ok_or(WizardError::UnknownStep { step })
    }
}

impl fmt::Debug for Wizard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wizard")
            .field("step", &self.step)
            .field("questions", &self.questions.len())
            .field("answers", &self.answers)
            .finish_non_exhaustive()
    }
}
