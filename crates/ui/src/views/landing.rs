use dioxus::prelude::*;
use dioxus_router::use_navigator;
use tracing::warn;

use crate::context::AppContext;
use crate::routes::Route;
use crate::store::use_quiz_store;

#[component]
pub fn LandingView() -> Element {
    let ctx = use_context::<AppContext>();
    let store = use_quiz_store();
    let navigator = use_navigator();
    let mut error = use_signal(|| None::<String>);

    let on_start = move |_: MouseEvent| match store.start(ctx.catalog()) {
        Ok(()) => {
            error.set(None);
            let _ = navigator.push(Route::Question { number: 1 });
        }
        Err(err) => {
            warn!(%err, "could not start a session");
            error.set(Some(err.to_string()));
        }
    };

    rsx! {
        div { class: "landing",
            section { class: "window landing-window",
                div { class: "title-bar",
                    h2 { class: "title-text", "Welcome" }
                }
                div { class: "window-body landing-body",
                    h1 { "Practice UX Leadership Scenarios" }
                    p { class: "landing-copy",
                        "Navigate stakeholder conflicts, business pressure, and ethical dilemmas. "
                        "Get AI-powered feedback on your thinking."
                    }
                    button {
                        class: "btn btn-primary",
                        id: "landing-start",
                        r#type: "button",
                        onclick: on_start,
                        "Start Practice"
                    }
                    if let Some(message) = error() {
                        p { class: "inline-error", "{message}" }
                    }
                }
            }
        }
    }
}
