use checkin_core::model::{Answer, QuestionKind, Step};
use checkin_core::{Wizard, WizardError};

pub const WELCOME_TITLE: &str = "Welcome";
pub const WELCOME_MESSAGE: &str = "Take a moment to reflect.";
pub const TEXT_PLACEHOLDER: &str = "Type your answer here...";
pub const BEGIN_LABEL: &str = "Begin";
pub const NEXT_LABEL: &str = "Next";
pub const BACK_LABEL: &str = "Back";

/// User actions on the check-in card. Answer intents carry the step of the
/// card they came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckInIntent {
    Advance,
    Retreat,
    ToggleOption { step: Step, option: String },
    SetText { step: Step, value: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChipVm {
    pub label: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputVm {
    Chips(Vec<ChipVm>),
    Text { value: String, placeholder: &'static str },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardBody {
    Welcome { message: &'static str },
    Question { lines: [String; 2], input: InputVm },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterVm {
    pub show_back: bool,
    pub next_label: &'static str,
}

/// Everything one card renders, snapshotted for a single step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardVm {
    pub step: Step,
    pub title: String,
    pub body: CardBody,
    pub footer: FooterVm,
}

/// Build the card for `step`. Steps without a question render as welcome.
#[must_use]
pub fn map_card(wizard: &Wizard, step: Step) -> CardVm {
    let Some(question) = wizard.questions().at_step(step) else {
        return CardVm {
            step: Step::WELCOME,
            title: WELCOME_TITLE.to_string(),
            body: CardBody::Welcome {
                message: WELCOME_MESSAGE,
            },
            footer: FooterVm {
                show_back: false,
                next_label: BEGIN_LABEL,
            },
        };
    };

    let answer = wizard.answer(step);
    let input = match question.kind() {
        QuestionKind::Options(options) => InputVm::Chips(
            options
                .iter()
                .map(|option| ChipVm {
                    label: option.clone(),
                    selected: answer.is_some_and(|answer| answer.is_selected(option)),
                })
                .collect(),
        ),
        QuestionKind::Text => InputVm::Text {
            value: answer
                .and_then(Answer::text)
                .unwrap_or_default()
                .to_string(),
            placeholder: TEXT_PLACEHOLDER,
        },
    };

    CardVm {
        step,
        title: format!("Question {step}"),
        body: CardBody::Question {
            lines: question.lines().clone(),
            input,
        },
        footer: FooterVm {
            show_back: true,
            next_label: NEXT_LABEL,
        },
    }
}

pub struct CheckInVm {
    wizard: Wizard,
}

impl CheckInVm {
    #[must_use]
    pub fn new(wizard: Wizard) -> Self {
        Self { wizard }
    }

    #[must_use]
    pub fn step(&self) -> Step {
        self.wizard.step()
    }

    #[must_use]
    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    #[must_use]
    pub fn card(&self, step: Step) -> CardVm {
        map_card(&self.wizard, step)
    }

    /// Apply an intent and return the step now current.
    ///
    /// # Errors
    ///
    /// Returns `WizardError` when an answer intent does not fit its step.
    pub fn apply(&mut self, intent: CheckInIntent) -> Result<Step, WizardError> {
        match intent {
            CheckInIntent::Advance => {
                self.wizard.advance();
            }
            CheckInIntent::Retreat => {
                self.wizard.retreat();
            }
            CheckInIntent::ToggleOption { step, option } => {
                self.wizard.record_option(step, &option)?;
            }
            CheckInIntent::SetText { step, value } => {
                self.wizard.record_text(step, value)?;
            }
        }
        Ok(self.wizard.step())
    }
}
