use std::sync::Arc;

use checkin_core::{QuestionGenerator, Wizard};

use crate::vm::MotionMode;

pub trait UiApp: Send + Sync {
    fn title(&self) -> String;
    fn motion_mode(&self) -> MotionMode;

    /// A fresh generator for each mounted check-in.
    fn question_generator(&self) -> Box<dyn QuestionGenerator>;
}

#[derive(Clone)]
pub struct AppContext {
    app: Arc<dyn UiApp>,
    title: String,
    motion_mode: MotionMode,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            app: Arc::clone(app),
            title: app.title(),
            motion_mode: app.motion_mode(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn motion_mode(&self) -> MotionMode {
        self.motion_mode
    }

    /// Start a new check-in: welcome card, seed questions, no answers.
    #[must_use]
    pub fn new_wizard(&self) -> Wizard {
        Wizard::new(self.app.question_generator())
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
