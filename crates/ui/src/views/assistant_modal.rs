use dioxus::prelude::*;

use diagnostic_core::model::Category;

use crate::context::AppContext;
use crate::vm::{AssistantVm, accept_input};

/// Chat panel over the Explanation Collaborator.
///
/// The send control is disabled while a call is outstanding; there is no
/// queuing and no cancellation. The conversation handle is owned by the
/// caller, so closing and reopening the modal resumes the same transcript.
#[component]
pub fn AssistantModal(
    result: Category,
    chat: Signal<Option<AssistantVm>>,
    on_close: EventHandler<()>,
) -> Element {
    let ctx = use_context::<AppContext>();
    let assistant = ctx.assistant();

    let mut input = use_signal(String::new);
    let mut busy = use_signal(|| chat.peek().is_none());

    // Seed the conversation and fetch the opening explanation on first
    // appearance only; a resumed conversation is shown as-is.
    let assistant_for_open = assistant.clone();
    let _open = use_resource(move || {
        let assistant = assistant_for_open.clone();
        let mut chat = chat;
        let mut busy = busy;
        async move {
            if chat.peek().is_some() {
                return;
            }
            let opened = AssistantVm::open(&assistant, result).await;
            chat.set(Some(opened));
            busy.set(false);
        }
    });

    let assistant_for_send = assistant.clone();
    let send = use_callback(move |()| {
        if *busy.peek() {
            return;
        }
        let Some(text) = accept_input(input.peek().as_str()) else {
            return;
        };
        input.set(String::new());
        busy.set(true);
        let mut chat = chat;
        chat.with_mut(|vm| {
            if let Some(vm) = vm.as_mut() {
                vm.push_user(&text);
            }
        });

        let assistant = assistant_for_send.clone();
        spawn(async move {
            let Some(mut current) = chat.peek().clone() else {
                busy.set(false);
                return;
            };
            current.request_reply(&assistant, &text).await;
            chat.set(Some(current));
            busy.set(false);
        });
    });

    let transcript = chat.read().clone();
    let is_busy = *busy.read();

    rsx! {
        div { class: "modal-overlay",
            div { class: "modal",
                header { class: "modal-header",
                    span { class: "modal-title", "NovaMentors Assistant" }
                    button {
                        class: "modal-close",
                        id: "assistant-close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }

                div { class: "messages",
                    if let Some(transcript) = transcript.as_ref() {
                        for (idx, msg) in transcript.messages().iter().enumerate() {
                            div {
                                key: "{idx}",
                                class: if msg.is_user() { "message user" } else { "message model" },
                                div { class: "bubble", "{msg.text}" }
                            }
                        }
                    }
                    if is_busy {
                        div { class: "message model",
                            div { class: "bubble typing", "…" }
                        }
                    }
                }

                div { class: "composer",
                    input {
                        r#type: "text",
                        id: "assistant-input",
                        placeholder: "Ask about your bottleneck result...",
                        value: "{input}",
                        oninput: move |evt| input.set(evt.value()),
                        onkeydown: move |evt| {
                            if evt.key() == Key::Enter {
                                send.call(());
                            }
                        },
                    }
                    button {
                        class: "cta-primary",
                        id: "assistant-send",
                        disabled: is_busy,
                        onclick: move |_| send.call(()),
                        "Send"
                    }
                }
            }
        }
    }
}
