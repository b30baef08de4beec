mod answer;
mod ids;
mod question;
mod question_set;

pub use answer::{Answer, AnswerMap};
pub use ids::{QuestionId, Step};
pub use question::{Question, QuestionError, QuestionKind};
pub use question_set::{QuestionSet, QuestionSetError};
