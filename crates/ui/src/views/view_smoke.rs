use checkin_core::SyntheticKind;
use checkin_core::model::{Answer, Step};

use super::test_harness::setup_view_harness;
use crate::vm::{CardPhase, CheckInIntent, MotionMode};

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[tokio::test(flavor = "current_thread")]
async fn welcome_card_renders_begin_without_back() {
    let harness = setup_view_harness(MotionMode::Instant, &[]);
    let html = harness.render();
    assert!(html.contains("Welcome"), "missing title in {html}");
    assert!(html.contains("Take a moment to reflect."), "missing body in {html}");
    assert!(html.contains("Begin"), "missing begin in {html}");
    assert!(!html.contains("Back"), "unexpected back in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn welcome_card_staggers_reveals() {
    let harness = setup_view_harness(MotionMode::Instant, &[]);
    let html = harness.render();
    assert!(html.contains("animation-delay: 0ms"), "missing title slot in {html}");
    assert!(html.contains("animation-delay: 400ms"), "missing body slot in {html}");
    assert!(html.contains("animation-delay: 1600ms"), "missing footer slot in {html}");
    assert!(html.contains("checkin-card--entering"), "missing enter class in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn begin_shows_first_question_with_chips() {
    let mut harness = setup_view_harness(MotionMode::Instant, &[]);
    harness.send(CheckInIntent::Advance);
    let html = harness.render();
    assert!(html.contains("Question 1"), "missing title in {html}");
    assert!(html.contains("How are you"), "missing line 1 in {html}");
    assert!(html.contains("feeling today?"), "missing line 2 in {html}");
    assert_eq!(count(&html, "aria-pressed="), 5, "chips in {html}");
    assert!(html.contains("Back"), "missing back in {html}");
    assert!(html.contains("Next"), "missing next in {html}");
    assert!(!html.contains("Begin"), "unexpected begin in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn toggling_a_chip_marks_it_pressed() {
    let mut harness = setup_view_harness(MotionMode::Instant, &[]);
    harness.send(CheckInIntent::Advance);
    harness.send(CheckInIntent::ToggleOption {
        step: Step::new(1),
        option: "Happy".into(),
    });
    let html = harness.render();
    assert_eq!(count(&html, "checkin-chip--on"), 1, "selected chips in {html}");
    assert_eq!(count(&html, "aria-pressed=\"true\""), 1, "pressed chips in {html}");

    harness.send(CheckInIntent::ToggleOption {
        step: Step::new(1),
        option: "Happy".into(),
    });
    let html = harness.render();
    assert_eq!(count(&html, "checkin-chip--on"), 0, "selected chips in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn text_question_records_typed_answer() {
    let mut harness = setup_view_harness(MotionMode::Instant, &[]);
    harness.send(CheckInIntent::Advance);
    harness.send(CheckInIntent::Advance);
    let html = harness.render();
    assert!(html.contains("you're grateful for?"), "missing line in {html}");
    assert!(html.contains("Type your answer here..."), "missing placeholder in {html}");

    harness.send(CheckInIntent::SetText {
        step: Step::new(2),
        value: "sunlight".into(),
    });
    let answer = harness.with_vm(|vm| vm.wizard().answer(Step::new(2)).cloned());
    assert_eq!(answer, Some(Answer::Text("sunlight".into())));
}

#[tokio::test(flavor = "current_thread")]
async fn advancing_past_seed_renders_generated_question() {
    let mut harness = setup_view_harness(MotionMode::Instant, &[SyntheticKind::Options]);
    for _ in 0..4 {
        harness.send(CheckInIntent::Advance);
    }
    let html = harness.render();
    assert!(html.contains("Question 4"), "missing title in {html}");
    assert!(html.contains("Generated question 4"), "missing line in {html}");
    assert!(html.contains("Option 3"), "missing option in {html}");
    assert_eq!(harness.with_vm(|vm| vm.wizard().questions().len()), 4);
}

#[tokio::test(flavor = "current_thread")]
async fn back_returns_to_welcome() {
    let mut harness = setup_view_harness(MotionMode::Instant, &[]);
    harness.send(CheckInIntent::Advance);
    harness.send(CheckInIntent::Retreat);
    let html = harness.render();
    assert!(html.contains("Welcome"), "missing title in {html}");
    assert!(html.contains("Begin"), "missing begin in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn animated_advance_keeps_outgoing_card_until_exit() {
    let mut harness = setup_view_harness(MotionMode::Animated, &[]);
    harness.send(CheckInIntent::Advance);

    assert_eq!(harness.with_vm(|vm| vm.step()), Step::new(1));
    let presence = harness.presence();
    assert_eq!(presence.shown(), Step::WELCOME);
    assert_eq!(presence.phase(), CardPhase::Exiting);

    let html = harness.render();
    assert!(html.contains("Welcome"), "outgoing card missing in {html}");
    assert!(!html.contains("Question 1"), "incoming card mounted early in {html}");
    assert!(html.contains("checkin-card--exiting"), "missing exit class in {html}");
    assert!(html.contains("animation-duration: 1000ms"), "missing exit timing in {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn animated_advance_mounts_incoming_card_after_exit() {
    let mut harness = setup_view_harness(MotionMode::Animated, &[]);
    harness.send(CheckInIntent::Advance);
    harness.settle_card().await;

    let presence = harness.presence();
    assert_eq!(presence.shown(), Step::new(1));
    assert_eq!(presence.phase(), CardPhase::Entering);

    let html = harness.render();
    assert!(html.contains("Question 1"), "incoming card missing in {html}");
    assert!(html.contains("checkin-card--entering"), "missing enter class in {html}");
    assert!(!html.contains("checkin-card--exiting"), "exit class left in {html}");
    assert!(!html.contains("Welcome"), "outgoing card left in {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn step_change_during_exit_lands_on_latest_step() {
    let mut harness = setup_view_harness(MotionMode::Animated, &[]);
    harness.send(CheckInIntent::Advance);
    harness.send(CheckInIntent::Advance);

    let presence = harness.presence();
    assert_eq!(presence.shown(), Step::WELCOME);
    assert_eq!(presence.pending(), Some(Step::new(2)));

    harness.settle_card().await;
    assert_eq!(harness.presence().shown(), Step::new(2));
    assert_eq!(harness.with_vm(|vm| vm.step()), Step::new(2));

    let html = harness.render();
    assert!(html.contains("Question 2"), "latest card missing in {html}");
    assert!(html.contains("you're grateful for?"), "missing line in {html}");
    assert!(!html.contains("Question 1"), "skipped card mounted in {html}");
    assert!(!html.contains("Welcome"), "outgoing card left in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn rejected_intent_leaves_state_untouched() {
    let mut harness = setup_view_harness(MotionMode::Instant, &[]);
    harness.send(CheckInIntent::Advance);
    harness.send(CheckInIntent::SetText {
        step: Step::new(1),
        value: "fine".into(),
    });
    assert!(harness.with_vm(|vm| vm.wizard().answers().is_empty()));
    assert_eq!(harness.with_vm(|vm| vm.step()), Step::new(1));
}
