use dioxus::prelude::*;
use dioxus_router::use_navigator;
use tracing::debug;

use quiz_core::panels::PanelId;
use services::Phase;

use crate::context::AppContext;
use crate::routes::Route;
use crate::store::use_quiz_store;
use crate::views::desktop::{Desktop, Taskbar};
use crate::views::window::Window;
use crate::vm::{FeedbackPane, map_question};

const HELP_PARAGRAPHS: [&str; 3] = [
    "Read the scenario and answer the way you would handle it at work. There is no single right answer.",
    "Say what you would do first, who you would talk to and how you would decide. Concrete steps beat general principles.",
    "Each answer gets written feedback. After five scenarios you get an overall level and a summary.",
];

#[component]
pub fn QuestionView(number: usize) -> Element {
    let ctx = use_context::<AppContext>();
    let store = use_quiz_store();
    let navigator = use_navigator();
    let client = ctx.evaluation_client();

    let vm = map_question(&store.session.read(), number);
    let valid = vm.is_some();
    use_hook(move || {
        if valid {
            store.show_workspace();
        }
    });

    use_effect(use_reactive((&number,), move |(number,)| {
        let target = match store.session.read().phase() {
            Phase::InProgress { index, .. } if index + 1 == number => None,
            Phase::AwaitingOverall { .. } | Phase::Complete => Some(Route::Results {}),
            _ => Some(Route::Landing {}),
        };
        if let Some(target) = target {
            let _ = navigator.replace(target);
        }
    }));

    let Some(vm) = vm else {
        return rsx! {};
    };

    let submit = {
        let client = client.clone();
        move |_: MouseEvent| {
            spawn(store.submit_answer(client.clone()));
        }
    };
    let retry = move |_: MouseEvent| {
        spawn(store.submit_answer(client.clone()));
    };
    let on_next = move |_: MouseEvent| match store.advance() {
        Ok(Phase::InProgress { index, .. }) => {
            let _ = navigator.push(Route::Question { number: index + 1 });
        }
        Ok(_) => {
            let _ = navigator.push(Route::Results {});
        }
        Err(err) => debug!(%err, "next ignored"),
    };
    let progress = store.session.read().progress();

    rsx! {
        div { class: "page question-page",
            Desktop {
                Window { id: PanelId::Question, title: vm.window_title.clone(),
                    h3 { class: "scenario-title", "{vm.scenario_title}" }
                    div { class: "scenario-text",
                        for (index, paragraph) in vm.paragraphs.iter().enumerate() {
                            p { key: "{index}", "{paragraph}" }
                        }
                    }
                    p { class: "question-prompt", "What do you do?" }
                }

                Window { id: PanelId::Answer, title: "Your answer - Notepad", extra_class: "notepad",
                    textarea {
                        class: "notepad-input",
                        id: "answer-input",
                        placeholder: "Type your response here...",
                        value: "{vm.draft}",
                        disabled: !vm.editable,
                        oninput: move |evt: FormEvent| store.set_draft(evt.value()),
                    }
                    if !vm.answered {
                        div { class: "window-footer",
                            button {
                                class: "btn btn-primary",
                                id: "answer-submit",
                                r#type: "button",
                                disabled: !vm.can_submit,
                                onclick: submit,
                                "{vm.submit_label()}"
                            }
                        }
                    }
                }

                Window { id: PanelId::Feedback, title: "Analyzer 3000", extra_class: "analyzer",
                    div { class: "feedback",
                        {match &vm.feedback {
                            FeedbackPane::Waiting => rsx! {
                                p { class: "waiting-text", "Waiting for submission..." }
                            },
                            FeedbackPane::Analyzing => rsx! {
                                p { class: "feedback-text", "Analyzing your response..." }
                            },
                            FeedbackPane::Ready { html } => rsx! {
                                div { class: "feedback-text", dangerous_inner_html: "{html}" }
                            },
                        }}
                    }
                    if vm.answered {
                        div { class: "window-footer",
                            button {
                                class: "btn btn-primary",
                                id: "feedback-next",
                                r#type: "button",
                                onclick: on_next,
                                "{vm.next_label()}"
                            }
                        }
                    }
                }

                Window {
                    id: PanelId::Help,
                    title: "What's expected of me?",
                    on_close: move |_| store.close_panel(PanelId::Help),
                    div { class: "help-text",
                        for (index, paragraph) in HELP_PARAGRAPHS.iter().enumerate() {
                            p { key: "{index}", "{paragraph}" }
                        }
                    }
                }
            }

            Taskbar {
                button {
                    class: "taskbar-button",
                    id: "open-help",
                    r#type: "button",
                    onclick: move |_| store.open_help(),
                    "What's expected of me again?"
                }
                span { class: "taskbar-status",
                    "{progress.answered} of {progress.total} answered"
                }
            }

            if let Some(message) = vm.error.clone() {
                div { class: "error-popup", role: "alertdialog",
                    div { class: "error-content",
                        p { "{message}" }
                        div { class: "error-actions",
                            button {
                                class: "btn btn-primary",
                                id: "answer-retry",
                                r#type: "button",
                                disabled: !vm.can_submit,
                                onclick: retry,
                                "Retry"
                            }
                            button {
                                class: "btn",
                                r#type: "button",
                                onclick: move |_| store.dismiss_error(),
                                "Close"
                            }
                        }
                    }
                }
            }
        }
    }
}
