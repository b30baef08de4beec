//! The fixed questions every check-in starts with.

use crate::model::{Question, QuestionId, QuestionKind, QuestionSet};

pub const SEED_QUESTION_COUNT: usize = 3;

const MOOD_OPTIONS: [&str; 5] = ["Happy", "Sad", "Anxious", "Excited", "Tired"];

#[must_use]
pub fn seed_questions() -> Vec<Question> {
    vec![
        Question::from_trusted(
            QuestionId::new(1),
            ["How are you", "feeling today?"],
            QuestionKind::Options(MOOD_OPTIONS.map(str::to_string).to_vec()),
        ),
        Question::from_trusted(
            QuestionId::new(2),
            ["What's one thing", "you're grateful for?"],
            QuestionKind::Text,
        ),
        Question::from_trusted(
            QuestionId::new(3),
            ["What's a small goal", "you have for today?"],
            QuestionKind::Text,
        ),
    ]
}

/// The seed questions as a ready-to-use set.
#[must_use]
pub fn seed_set() -> QuestionSet {
    let set = QuestionSet::from_questions(seed_questions());
    debug_assert!(set.is_ok(), "seed ids are 1..=3 in order");
    set.unwrap_or_default()
}
