use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use photo_core::prefs::Theme;
use services::DrillKind;

use crate::context::AppContext;
use crate::views::{
    ExposureDrillView, FlashDrillView, HomeView, HyperfocalDrillView, InverseSquareDrillView,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/exposure", ExposureDrillView)] Exposure {},
        #[route("/flash", FlashDrillView)] Flash {},
        #[route("/inverse-square", InverseSquareDrillView)] InverseSquare {},
        #[route("/hyperfocal", HyperfocalDrillView)] Hyperfocal {},
}

/// Route for a drill's dedicated page.
#[must_use]
pub fn route_for(kind: DrillKind) -> Route {
    match kind {
        DrillKind::Exposure => Route::Exposure {},
        DrillKind::Flash => Route::Flash {},
        DrillKind::InverseSquare => Route::InverseSquare {},
        DrillKind::Hyperfocal => Route::Hyperfocal {},
    }
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    let theme = use_signal(move || ctx.initial_theme());
    let root_class = if theme().is_dark() {
        "app dark-theme"
    } else {
        "app"
    };

    rsx! {
        div { class: "{root_class}",
            Sidebar { theme }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar(theme: Signal<Theme>) -> Element {
    let ctx = use_context::<AppContext>();
    let toggle_label = if theme().is_dark() {
        "☀️ Light mode"
    } else {
        "🌙 Dark mode"
    };

    rsx! {
        nav { class: "sidebar",
            h1 { "PhotoDrill" }
            ul {
                li { Link { to: Route::Home {}, "Home" } }
                for kind in DrillKind::ALL {
                    li { Link { to: route_for(kind), "{kind.title()}" } }
                }
            }
            button {
                class: "theme-toggle",
                r#type: "button",
                onclick: move |_| {
                    let mut theme = theme;
                    let next = theme().toggled();
                    theme.set(next);
                    let preferences = ctx.preferences();
                    spawn(async move {
                        // The toggle stays responsive even when persistence
                        // fails; the error only goes to stderr.
                        if let Err(err) = preferences.save_theme(next).await {
                            eprintln!("failed to persist theme preference: {err}");
                        }
                    });
                },
                "{toggle_label}"
            }
        }
    }
}
