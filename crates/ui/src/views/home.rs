use dioxus::prelude::*;
use dioxus_router::Link;

use services::DrillKind;

use crate::routes::route_for;

#[component]
pub fn HomeView() -> Element {
    rsx! {
        div { class: "page home-page",
            header { class: "view-header",
                h2 { class: "view-title", "Practice" }
                p { class: "view-subtitle",
                    "Pick a drill and practice the arithmetic behind exposure decisions."
                }
            }
            div { class: "view-divider" }
            div { class: "home-grid",
                for kind in DrillKind::ALL {
                    Link { class: "home-card", to: route_for(kind),
                        h3 { class: "home-card-title", "{kind.title()}" }
                        p { class: "home-card-blurb", "{kind.blurb()}" }
                    }
                }
            }
        }
    }
}
