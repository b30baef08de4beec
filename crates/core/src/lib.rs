#![forbid(unsafe_code)]

pub mod generator;
pub mod model;
pub mod seed;
pub mod wizard;

pub use generator::{
    QuestionGenerator, RandomQuestionGenerator, ScriptedQuestionGenerator, SyntheticKind,
};
pub use wizard::{Advance, Wizard, WizardError};
