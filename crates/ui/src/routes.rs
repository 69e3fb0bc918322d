use chrono::Datelike;
use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::DiagnosticView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", DiagnosticView)] Home {},
}

#[component]
fn Layout() -> Element {
    let year = chrono::Utc::now().year();

    rsx! {
        div { class: "app",
            header { class: "brand",
                h1 { "NovaMentors" }
                div { class: "brand-rule" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
            footer { class: "footnote",
                p { "© {year} NovaMentors. All rights reserved." }
            }
        }
    }
}
