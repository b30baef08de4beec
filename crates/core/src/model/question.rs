use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::QuestionId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question line {line} cannot be empty")]
    EmptyLine { line: usize },

    #[error("options question needs at least one option")]
    NoOptions,

    #[error("option cannot be empty")]
    EmptyOption,

    #[error("duplicate option: {0}")]
    DuplicateOption(String),
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// How a question is answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "options", rename_all = "snake_case")]
pub enum QuestionKind {
    /// Multi-select chips, rendered in this order.
    Options(Vec<String>),
    /// Single-line free text.
    Text,
}

impl QuestionKind {
    #[must_use]
    pub fn is_options(&self) -> bool {
        matches!(self, QuestionKind::Options(_))
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            QuestionKind::Options(_) => "options",
            QuestionKind::Text => "text",
        }
    }
}

/// A single check-in question, shown as two lines of prose.
///
/// Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    lines: [String; 2],
    kind: QuestionKind,
}

impl Question {
    /// Build a multiple-choice question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if a line is blank, the option list is empty,
    /// or an option is blank or repeated.
    pub fn options<I, S>(
        id: QuestionId,
        lines: [impl Into<String>; 2],
        options: I,
    ) -> Result<Self, QuestionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        if options.is_empty() {
            return Err(QuestionError::NoOptions);
        }
        for (idx, option) in options.iter().enumerate() {
            if option.trim().is_empty() {
                return Err(QuestionError::EmptyOption);
            }
            if options[..idx].contains(option) {
                return Err(QuestionError::DuplicateOption(option.clone()));
            }
        }
        Self::build(id, lines, QuestionKind::Options(options))
    }

    /// Build a free-text question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyLine` if a line is blank.
    pub fn text(id: QuestionId, lines: [impl Into<String>; 2]) -> Result<Self, QuestionError> {
        Self::build(id, lines, QuestionKind::Text)
    }

    /// Build from values known to be valid (seed data, placeholders).
    pub(crate) fn from_trusted(id: QuestionId, lines: [&str; 2], kind: QuestionKind) -> Self {
        Self {
            id,
            lines: lines.map(str::to_string),
            kind,
        }
    }

    fn build(
        id: QuestionId,
        lines: [impl Into<String>; 2],
        kind: QuestionKind,
    ) -> Result<Self, QuestionError> {
        let lines: [String; 2] = lines.map(Into::into);
        if let Some(line) = lines.iter().position(|line| line.trim().is_empty()) {
            return Err(QuestionError::EmptyLine { line: line + 1 });
        }
        Ok(Self { id, lines, kind })
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn lines(&self) -> &[String; 2] {
        &self.lines
    }

    #[must_use]
    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    /// Offered options, empty for text questions.
    #[must_use]
    pub fn option_list(&self) -> &[String] {
        match &self.kind {
            QuestionKind::Options(options) => options,
            QuestionKind::Text => &[],
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
