use dioxus::prelude::*;

use checkin_core::model::Step;

use crate::vm::{
    BACK_LABEL, CardBody, CardPhase, CardVm, CheckInIntent, ChipVm, InputVm, RevealSlot,
};

/// One check-in card. Keyed by step, so a new step mounts a fresh card and
/// replays the reveal sequence.
#[component]
pub fn CheckInCard(
    card: CardVm,
    phase: CardPhase,
    on_intent: EventHandler<CheckInIntent>,
) -> Element {
    // The outgoing card stays visible but takes no input.
    let inert = phase == CardPhase::Exiting;
    let step = card.step;
    let footer = card.footer;

    rsx! {
        div {
            class: "checkin-card {phase.class()}",
            style: "{phase.style()}",
            header { class: "checkin-card__header",
                Reveal { slot: RevealSlot::Title,
                    h2 { class: "checkin-card__title", "{card.title}" }
                }
            }
            div { class: "checkin-card__body",
                match card.body {
                    CardBody::Welcome { message } => rsx! {
                        Reveal { slot: RevealSlot::FirstLine,
                            p { class: "checkin-card__welcome", "{message}" }
                        }
                    },
                    CardBody::Question { lines, input } => rsx! {
                        Reveal { slot: RevealSlot::FirstLine,
                            p { class: "checkin-card__line", "{lines[0]}" }
                        }
                        Reveal { slot: RevealSlot::SecondLine,
                            p { class: "checkin-card__line checkin-card__line--last", "{lines[1]}" }
                        }
                        Reveal { slot: RevealSlot::Input,
                            QuestionInput { step, input, inert, on_intent }
                        }
                    },
                }
            }
            footer { class: "checkin-card__footer",
                Reveal { slot: RevealSlot::Footer,
                    if footer.show_back {
                        button {
                            class: "btn btn-secondary checkin-back",
                            r#type: "button",
                            disabled: inert,
                            onclick: move |_| on_intent.call(CheckInIntent::Retreat),
                            "{BACK_LABEL}"
                        }
                    }
                    button {
                        class: "btn btn-primary checkin-next",
                        r#type: "button",
                        disabled: inert,
                        onclick: move |_| on_intent.call(CheckInIntent::Advance),
                        "{footer.next_label}"
                    }
                }
            }
        }
    }
}

/// Fades and slides its children up at the slot's point in the sequence.
#[component]
fn Reveal(slot: RevealSlot, children: Element) -> Element {
    rsx! {
        div { class: "checkin-reveal", style: "{slot.style()}", {children} }
    }
}

#[component]
fn QuestionInput(
    step: Step,
    input: InputVm,
    inert: bool,
    on_intent: EventHandler<CheckInIntent>,
) -> Element {
    match input {
        InputVm::Chips(chips) => rsx! {
            div { class: "checkin-chips",
                for (label, chip) in chips.into_iter().map(|chip| (chip.label.clone(), chip)) {
                    OptionChip { key: "{label}", step, chip, inert, on_intent }
                }
            }
        },
        InputVm::Text { value, placeholder } => rsx! {
            input {
                class: "checkin-text",
                r#type: "text",
                placeholder,
                value: "{value}",
                disabled: inert,
                oninput: move |evt| {
                    on_intent.call(CheckInIntent::SetText { step, value: evt.value() });
                },
                onkeydown: move |evt| {
                    if evt.data.key() == Key::Enter {
                        evt.prevent_default();
                        on_intent.call(CheckInIntent::Advance);
                    }
                },
            }
        },
    }
}

#[component]
fn OptionChip(
    step: Step,
    chip: ChipVm,
    inert: bool,
    on_intent: EventHandler<CheckInIntent>,
) -> Element {
    let class = if chip.selected {
        "checkin-chip checkin-chip--on"
    } else {
        "checkin-chip"
    };
    let label = chip.label.clone();

    rsx! {
        button {
            class,
            r#type: "button",
            aria_pressed: "{chip.selected}",
            disabled: inert,
            onclick: move |_| {
                on_intent.call(CheckInIntent::ToggleOption { step, option: label.clone() });
            },
            "{chip.label}"
        }
    }
}
