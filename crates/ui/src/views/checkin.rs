use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::motion::CARD_EXIT;
use crate::vm::{CardPresence, CheckInIntent, CheckInVm, PresenceChange};

use super::card::CheckInCard;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn CheckInView() -> Element {
    let ctx = use_context::<AppContext>();
    let motion_mode = ctx.motion_mode();

    let vm = use_signal(|| CheckInVm::new(ctx.new_wizard()));
    let presence = use_signal(|| CardPresence::new(vm.peek().step()));

    // Wizard state changes right away; the card swap only follows it.
    let dispatch_intent = use_callback(move |intent: CheckInIntent| {
        let mut vm = vm;
        let mut presence = presence;

        let result = vm.write().apply(intent);
        let step = match result {
            Ok(step) => step,
            Err(err) => {
                tracing::warn!(%err, "check-in intent rejected");
                return;
            }
        };

        let change = presence.write().retarget(step, motion_mode);
        if change == PresenceChange::ExitStarted {
            spawn(async move {
                let mut presence = presence;
                tokio::time::sleep(CARD_EXIT.duration).await;
                if let Some(shown) = presence.write().finish_exit() {
                    tracing::debug!(step = %shown, "card shown");
                }
            });
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<CheckInTestHandles>() {
                handles.register(dispatch_intent, vm, presence);
            }
        }
    }

    let current = *presence.read();
    let card = vm.read().card(current.shown());
    let phase = current.phase();
    let card_key = card.step.value();

    rsx! {
        div { class: "checkin-stage",
            CheckInCard {
                key: "{card_key}",
                card,
                phase,
                on_intent: dispatch_intent,
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct CheckInTestHandles {
    dispatch: Rc<RefCell<Option<Callback<CheckInIntent>>>>,
    vm: Rc<RefCell<Option<Signal<CheckInVm>>>>,
    presence: Rc<RefCell<Option<Signal<CardPresence>>>>,
}

#[cfg(test)]
impl CheckInTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<CheckInIntent>,
        vm: Signal<CheckInVm>,
        presence: Signal<CardPresence>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
        *self.presence.borrow_mut() = Some(presence);
    }

    pub(crate) fn dispatch(&self) -> Callback<CheckInIntent> {
        (*self.dispatch.borrow()).expect("check-in dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<CheckInVm> {
        (*self.vm.borrow()).expect("check-in vm registered")
    }

    pub(crate) fn presence(&self) -> Signal<CardPresence> {
        (*self.presence.borrow()).expect("check-in presence registered")
    }
}
