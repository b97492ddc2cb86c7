use std::collections::HashSet;

use dioxus::prelude::*;
use dioxus_router::use_navigator;

use quiz_core::panels::PanelId;
use services::Phase;

use crate::context::AppContext;
use crate::routes::Route;
use crate::store::use_quiz_store;
use crate::views::ViewState;
use crate::views::desktop::Desktop;
use crate::views::window::Window;
use crate::vm::{ReviewItemVm, map_results};

#[component]
pub fn ResultsView() -> Element {
    let ctx = use_context::<AppContext>();
    let store = use_quiz_store();
    let navigator = use_navigator();
    let client = ctx.evaluation_client();
    let mut expanded = use_signal(HashSet::<usize>::new);

    let vm = map_results(&store.session.read());
    let valid = vm.is_some();
    use_hook(move || {
        if valid {
            store.show_results();
        }
    });

    // Kicks off the overall request once, and sends unfinished sessions home.
    {
        let client = client.clone();
        use_effect(move || {
            let (phase, has_error) = {
                let session = store.session.read();
                (session.phase(), session.last_error().is_some())
            };
            match phase {
                Phase::AwaitingOverall { requesting: false } if !has_error => {
                    spawn(store.request_overall(client.clone()));
                }
                Phase::NotStarted | Phase::InProgress { .. } => {
                    let _ = navigator.replace(Route::Landing {});
                }
                _ => {}
            }
        });
    }

    let Some(vm) = vm else {
        return rsx! {};
    };

    let retry = move |_: MouseEvent| {
        spawn(store.request_overall(client.clone()));
    };
    let start_over = move |_: MouseEvent| {
        store.start_over();
        let _ = navigator.push(Route::Landing {});
    };

    rsx! {
        div { class: "page results-page",
            Desktop {
                Window { id: PanelId::Results, title: "Your Results", extra_class: "results-window",
                    {match &vm.overall {
                        ViewState::Idle | ViewState::Loading => rsx! {
                            div { class: "loading",
                                p { "Analyzing your overall performance..." }
                            }
                        },
                        ViewState::Error(err) => rsx! {
                            div { class: "error",
                                p { "{err.message()}" }
                                button {
                                    class: "btn btn-primary",
                                    id: "results-retry",
                                    r#type: "button",
                                    onclick: retry,
                                    "Retry"
                                }
                            }
                        },
                        ViewState::Ready(overall) => rsx! {
                            div { class: "overall",
                                div {
                                    class: "level-badge",
                                    style: "background-color: {overall.badge_color};",
                                    "{overall.level}"
                                }
                                div { class: "summary",
                                    for (index, paragraph) in overall.paragraphs.iter().enumerate() {
                                        p { key: "{index}", "{paragraph}" }
                                    }
                                }
                                if let Some(duration) = overall.duration.as_ref() {
                                    p { class: "duration", "Completed in {duration}" }
                                }
                            }
                        },
                    }}

                    div { class: "review",
                        h2 { class: "section-title", "Your Responses" }
                        for review in vm.reviews.iter() {
                            ReviewItem {
                                key: "{review.number}",
                                review: review.clone(),
                                open: expanded.read().contains(&review.number),
                                on_toggle: move |number: usize| {
                                    let mut set = expanded.write();
                                    if !set.remove(&number) {
                                        set.insert(number);
                                    }
                                },
                            }
                        }
                    }

                    div { class: "actions",
                        button {
                            class: "btn btn-primary",
                            id: "results-start-over",
                            r#type: "button",
                            onclick: start_over,
                            "Start Over"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ReviewItem(review: ReviewItemVm, open: bool, on_toggle: EventHandler<usize>) -> Element {
    let number = review.number;
    rsx! {
        article { class: "question-review",
            div {
                class: "question-header",
                onclick: move |_| on_toggle.call(number),
                h3 { class: "question-title", "Question {number}: {review.title}" }
                span { class: "expand-icon", if open { "▼" } else { "▶" } }
            }
            if open {
                div { class: "scenario-text",
                    for (index, paragraph) in review.paragraphs.iter().enumerate() {
                        p { key: "{index}", "{paragraph}" }
                    }
                }
            }
            div { class: "answer-box",
                h4 { "Your Answer:" }
                p { class: "answer-text", "{review.answer}" }
            }
            div { class: "feedback-box",
                h4 { "Feedback:" }
                div { class: "feedback-text", dangerous_inner_html: "{review.feedback_html}" }
            }
        }
    }
}
