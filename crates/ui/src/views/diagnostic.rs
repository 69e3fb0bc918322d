use dioxus::prelude::*;

use diagnostic_core::model::Category;

use crate::context::AppContext;
use crate::views::{AssistantModal, ViewError};
use crate::vm::{AssistantVm, DiagnosticVm, Step};

#[component]
fn ProgressBar(percent: f64) -> Element {
    rsx! {
        div { class: "progress-track",
            div { class: "progress-fill", style: "width: {percent}%" }
        }
    }
}

#[component]
pub fn DiagnosticView() -> Element {
    let ctx = use_context::<AppContext>();
    let diagnostic = ctx.diagnostic();

    let mut vm = use_signal(|| None::<DiagnosticVm>);
    let mut error = use_signal(|| None::<ViewError>);
    let mut assistant_open = use_signal(|| false);
    // The conversation handle outlives the modal: closing and reopening the
    // panel resumes the same transcript instead of re-greeting.
    let assistant_chat = use_signal(|| None::<AssistantVm>);

    // Read-once resume check before any screen renders. A validated stored
    // session lands straight on the result screen; anything else starts fresh
    // at the intro.
    let diagnostic_for_resume = diagnostic.clone();
    let _resume = use_resource(move || {
        let diagnostic = diagnostic_for_resume.clone();
        let mut vm = vm;
        async move {
            let restored = diagnostic.resume().await;
            vm.set(Some(match restored {
                Some(result) => DiagnosticVm::resumed(result),
                None => DiagnosticVm::new(),
            }));
        }
    });

    let diagnostic_for_answer = diagnostic.clone();
    let answer = use_callback(move |category: Category| {
        let diagnostic = diagnostic_for_answer.clone();
        spawn(async move {
            let Some(mut current) = vm.peek().clone() else {
                return;
            };
            match current.answer(&diagnostic, category).await {
                Ok(_) => vm.set(Some(current)),
                Err(err) => error.set(Some(err)),
            }
        });
    });

    let Some(current) = vm.read().clone() else {
        return rsx! {
            div { class: "card",
                p { class: "muted", "Loading…" }
            }
        };
    };

    rsx! {
        div { class: "card",
            if error.read().is_some() {
                div { class: "error-banner", "{ViewError::message()}" }
            }

            match current.step() {
                Step::Intro => rsx! {
                    section { class: "intro",
                        h2 { "Manager’s Bottleneck Diagnostic" }
                        p { class: "lede",
                            "Identify the hidden friction points in your department. Answer 4 "
                            "strategic questions to pinpoint whether your bottleneck is Process, "
                            "Role, or Visibility based."
                        }
                        button {
                            class: "cta-primary",
                            id: "diagnostic-begin",
                            onclick: move |_| {
                                vm.with_mut(|vm| {
                                    if let Some(vm) = vm.as_mut() {
                                        vm.begin();
                                    }
                                });
                            },
                            "Begin Diagnostic"
                        }
                        p { class: "muted", "Takes less than 2 minutes." }
                    }
                },
                Step::Quiz => rsx! {
                    section { class: "quiz",
                        ProgressBar { percent: current.progress_percent() }
                        span { class: "question-counter",
                            "Question {current.question_number()} of {current.question_count()}"
                        }
                        if let Some(question) = current.question() {
                            h3 { "{question.prompt}" }
                            div { class: "options",
                                for option in question.options.iter() {
                                    button {
                                        key: "{option.category.index()}",
                                        class: "option",
                                        onclick: {
                                            let category = option.category;
                                            move |_| answer.call(category)
                                        },
                                        "{option.text}"
                                    }
                                }
                            }
                        }
                    }
                },
                Step::Result => rsx! {
                    section { class: "result",
                        p { class: "result-kicker", "Diagnostic Complete" }
                        {
                            let result = current.result().unwrap_or(Category::Process);
                            rsx! {
                                h2 { "{result.label()}" }
                                p { class: "lede", "{result.description()}" }
                                div { class: "result-actions",
                                    a {
                                        class: "cta-primary",
                                        id: "diagnostic-booking",
                                        href: "{ctx.booking_url()}",
                                        target: "_blank",
                                        rel: "noopener noreferrer",
                                        "Book a Strategy Call"
                                    }
                                    button {
                                        class: "cta-secondary",
                                        id: "diagnostic-explain",
                                        onclick: move |_| assistant_open.set(true),
                                        "Explain my result with the AI assistant"
                                    }
                                }
                            }
                        }
                    }
                },
            }
        }

        if *assistant_open.read() {
            if let Some(result) = current.result() {
                AssistantModal {
                    result,
                    chat: assistant_chat,
                    on_close: move |()| assistant_open.set(false),
                }
            }
        }
    }
}
