//! Card transition and staggered reveal timeline.
//!
//! Timing lives here; `assets/style.css` only carries the keyframes. Every
//! value is rendered into inline styles so the timeline can be checked
//! without a webview.

use std::time::Duration;

use checkin_core::model::Step;

/// Easing curves used by the card and its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    EaseIn,
    EaseOut,
}

impl Easing {
    #[must_use]
    pub const fn css(self) -> &'static str {
        match self {
            Easing::EaseIn => "ease-in",
            Easing::EaseOut => "ease-out",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MotionSpec {
    pub duration: Duration,
    pub delay: Duration,
    pub easing: Easing,
}

impl MotionSpec {
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "animation-duration: {}ms; animation-delay: {}ms; animation-timing-function: {};",
            self.duration.as_millis(),
            self.delay.as_millis(),
            self.easing.css(),
        )
    }
}

/// Fade + scale up from 0.95.
pub const CARD_ENTER: MotionSpec = MotionSpec {
    duration: Duration::from_millis(1200),
    delay: Duration::ZERO,
    easing: Easing::EaseOut,
};

/// Fade + scale down to 0.95.
pub const CARD_EXIT: MotionSpec = MotionSpec {
    duration: Duration::from_millis(1000),
    delay: Duration::ZERO,
    easing: Easing::EaseIn,
};

pub const REVEAL_STAGGER: Duration = Duration::from_millis(400);
pub const REVEAL_DURATION: Duration = Duration::from_millis(800);

/// Position of an element in a card's entrance sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum RevealSlot {
    Title,
    FirstLine,
    SecondLine,
    Input,
    Footer,
}

impl RevealSlot {
    pub const ALL: [RevealSlot; 5] = [
        RevealSlot::Title,
        RevealSlot::FirstLine,
        RevealSlot::SecondLine,
        RevealSlot::Input,
        RevealSlot::Footer,
    ];

    #[must_use]
    pub const fn order(self) -> u32 {
        match self {
            RevealSlot::Title => 0,
            RevealSlot::FirstLine => 1,
            RevealSlot::SecondLine => 2,
            RevealSlot::Input => 3,
            RevealSlot::Footer => 4,
        }
    }

    #[must_use]
    pub fn motion(self) -> MotionSpec {
        MotionSpec {
            duration: REVEAL_DURATION,
            delay: REVEAL_STAGGER * self.order(),
            easing: Easing::EaseOut,
        }
    }

    #[must_use]
    pub fn style(self) -> String {
        self.motion().style()
    }
}

/// Whether step changes animate or swap cards at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MotionMode {
    #[default]
    Animated,
    Instant,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardPhase {
    Entering,
    Exiting,
}

impl CardPhase {
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            CardPhase::Entering => "checkin-card--entering",
            CardPhase::Exiting => "checkin-card--exiting",
        }
    }

    #[must_use]
    pub fn style(self) -> String {
        match self {
            CardPhase::Entering => CARD_ENTER.style(),
            CardPhase::Exiting => CARD_EXIT.style(),
        }
    }
}

/// What [`CardPresence::retarget`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresenceChange {
    Unchanged,
    /// The shown card started exiting; call `finish_exit` after `CARD_EXIT`.
    ExitStarted,
    /// An exit was already running; it will land on the new step instead.
    Retargeted,
    /// Instant mode: the new card is shown immediately.
    Swapped,
}

/// Which card is mounted. Only one card is ever on screen: the outgoing one
/// finishes its exit before the incoming one mounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardPresence {
    shown: Step,
    next: Option<Step>,
}

impl CardPresence {
    #[must_use]
    pub const fn new(step: Step) -> Self {
        Self {
            shown: step,
            next: None,
        }
    }

    #[must_use]
    pub const fn shown(&self) -> Step {
        self.shown
    }

    #[must_use]
    pub const fn pending(&self) -> Option<Step> {
        self.next
    }

    #[must_use]
    pub const fn phase(&self) -> CardPhase {
        if self.next.is_some() {
            CardPhase::Exiting
        } else {
            CardPhase::Entering
        }
    }

    pub fn retarget(&mut self, step: Step, mode: MotionMode) -> PresenceChange {
        if mode == MotionMode::Instant {
            if self.shown == step && self.next.is_none() {
                return PresenceChange::Unchanged;
            }
            self.shown = step;
            self.next = None;
            return PresenceChange::Swapped;
        }
        match self.next {
            Some(next) if next == step => PresenceChange::Unchanged,
            Some(_) => {
                self.next = Some(step);
                PresenceChange::Retargeted
            }
            None if self.shown == step => PresenceChange::Unchanged,
            None => {
                self.next = Some(step);
                PresenceChange::ExitStarted
            }
        }
    }

    /// Mount the pending card. Returns the newly shown step, if any.
    pub fn finish_exit(&mut self) -> Option<Step> {
        let next = self.next.take()?;
        self.shown = next;
        Some(next)
    }
}
