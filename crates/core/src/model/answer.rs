use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::ids::Step;
use crate::model::question::QuestionKind;

/// A recorded answer. The variant always matches the question's kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Answer {
    /// Selected options, in the order they were first picked.
    Options(Vec<String>),
    Text(String),
}

impl Answer {
    /// The empty answer for a question of the given kind.
    #[must_use]
    pub fn empty_for(kind: &QuestionKind) -> Self {
        match kind {
            QuestionKind::Options(_) => Answer::Options(Vec::new()),
            QuestionKind::Text => Answer::Text(String::new()),
        }
    }

    #[must_use]
    pub fn selected(&self) -> &[String] {
        match self {
            Answer::Options(selected) => selected,
            Answer::Text(_) => &[],
        }
    }

    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Answer::Text(text) => Some(text),
            Answer::Options(_) => None,
        }
    }

    #[must_use]
    pub fn is_selected(&self, option: &str) -> bool {
        self.selected().iter().any(|item| item == option)
    }

    /// Adds `option` if absent, removes it otherwise. No-op on text answers.
    pub(crate) fn toggle(&mut self, option: &str) {
        if let Answer::Options(selected) = self {
            if let Some(pos) = selected.iter().position(|item| item == option) {
                selected.remove(pos);
            } else {
                selected.push(option.to_string());
            }
        }
    }
}

/// Answers keyed by wizard step. Entries are created lazily and never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerMap {
    entries: BTreeMap<Step, Answer>,
}

impl AnswerMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, step: Step) -> Option<&Answer> {
        self.entries.get(&step)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Step, &Answer)> {
        self.entries.iter().map(|(step, answer)| (*step, answer))
    }

    pub(crate) fn entry_for(&mut self, step: Step, kind: &QuestionKind) -> &mut Answer {
        self.entries
            .entry(step)
            .or_insert_with(|| Answer::empty_for(kind))
    }

    pub(crate) fn set(&mut self, step: Step, answer: Answer) {
        self.entries.insert(step, answer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_appends_then_removes_preserving_order() {
        let mut answer = Answer::Options(Vec::new());
        answer.toggle("a");
        answer.toggle("b");
        answer.toggle("c");
        answer.toggle("b");
        assert_eq!(answer.selected(), ["a", "c"]);
    }

    #[test]
    fn toggle_ignores_text_answers() {
        let mut answer = Answer::Text("hi".into());
        answer.toggle("a");
        assert_eq!(answer, Answer::Text("hi".into()));
    }

    #[test]
    fn entry_for_initializes_empty_answer() {
        let mut map = AnswerMap::new();
        let answer = map.entry_for(Step::new(1), &QuestionKind::Text);
        assert_eq!(answer, &Answer::Text(String::new()));
        assert_eq!(map.len(), 1);
    }
}
