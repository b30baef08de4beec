use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::CheckInView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Backdrop)]
        #[route("/", CheckInView)] CheckIn {},
}

/// Full-window gradient that centers the card.
#[component]
fn Backdrop() -> Element {
    rsx! {
        div { class: "checkin-backdrop",
            Outlet::<Route> {}
        }
    }
}
