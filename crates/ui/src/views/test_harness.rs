use std::sync::Arc;
use std::time::Duration;

use checkin_core::{QuestionGenerator, ScriptedQuestionGenerator, SyntheticKind};
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;

use crate::context::{UiApp, build_app_context};
use crate::vm::{CardPresence, CheckInIntent, CheckInVm, MotionMode};
use crate::views::CheckInView;
use crate::views::checkin::CheckInTestHandles;

const SETTLE_ROUNDS: usize = 200;

#[derive(Clone)]
struct TestApp {
    motion_mode: MotionMode,
    script: Vec<SyntheticKind>,
}

impl UiApp for TestApp {
    fn title(&self) -> String {
        "Check-in (test)".to_string()
    }

    fn motion_mode(&self) -> MotionMode {
        self.motion_mode
    }

    fn question_generator(&self) -> Box<dyn QuestionGenerator> {
        Box::new(ScriptedQuestionGenerator::new(self.script.clone()))
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: CheckInTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn CheckInHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { CheckInView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: CheckInTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Dispatch an intent as if a control on the card had been used.
    pub fn send(&mut self, intent: CheckInIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn with_vm<R>(&self, f: impl FnOnce(&CheckInVm) -> R) -> R {
        let vm = self.handles.vm();
        self.dom.in_runtime(|| f(&vm.peek()))
    }

    pub fn presence(&self) -> CardPresence {
        let presence = self.handles.presence();
        self.dom.in_runtime(|| *presence.peek())
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive spawned work until no card is waiting to mount.
    pub async fn settle_card(&mut self) {
        for _ in 0..SETTLE_ROUNDS {
            if self.presence().pending().is_none() {
                return;
            }
            self.drive_async().await;
        }
        panic!("card exit never finished: {:?}", self.presence());
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(motion_mode: MotionMode, script: &[SyntheticKind]) -> ViewHarness {
    let handles = CheckInTestHandles::default();
    let app = Arc::new(TestApp {
        motion_mode,
        script: script.to_vec(),
    });
    let dom = VirtualDom::new_with_props(
        CheckInHarness,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    let mut harness = ViewHarness { dom, handles };
    harness.rebuild();
    harness
}
