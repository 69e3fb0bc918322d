use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;

use diagnostic_core::model::{Category, ChatMessage};
use diagnostic_core::time::fixed_clock;
use services::{AssistantError, AssistantService, ChatBackend, DiagnosticService};
use storage::repository::InMemorySessionStore;

use crate::context::{UiApp, build_app_context};
use crate::views::{AssistantModal, DiagnosticView};
use crate::vm::AssistantVm;

/// Scripted assistant backend: each call pops the next reply; exhausted or
/// `Err` entries fail the call.
pub struct ScriptedBackend {
    replies: Vec<Result<&'static str, ()>>,
    calls: AtomicUsize,
}

impl ScriptedBackend {
    pub fn new(replies: Vec<Result<&'static str, ()>>) -> Self {
        Self {
            replies,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ChatBackend for ScriptedBackend {
    async fn complete(
        &self,
        _system: &str,
        _history: &[ChatMessage],
    ) -> Result<String, AssistantError> {
        let idx = self.calls.fetch_add(1, Ordering::SeqCst);
        match self.replies.get(idx) {
            Some(Ok(text)) => Ok((*text).to_string()),
            _ => Err(AssistantError::Disabled),
        }
    }
}

struct TestApp {
    diagnostic: Arc<DiagnosticService>,
    assistant: Arc<AssistantService>,
}

impl UiApp for TestApp {
    fn diagnostic(&self) -> Arc<DiagnosticService> {
        Arc::clone(&self.diagnostic)
    }

    fn assistant(&self) -> Arc<AssistantService> {
        Arc::clone(&self.assistant)
    }

    fn booking_url(&self) -> String {
        "https://calendar.app.google/xiA5mmnkpeKbmcAP9".to_string()
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for HarnessProps {}

#[component]
fn Harness(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { DiagnosticView {} }
}

/// Mounts the assistant modal, unmounts it, then mounts it again, driving the
/// toggles from timers so a test only has to pump the scheduler.
#[component]
fn ModalCycleHarness(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));

    let chat = use_signal(|| None::<AssistantVm>);
    let mut open = use_signal(|| true);

    use_future(move || async move {
        tokio::time::sleep(Duration::from_millis(5)).await;
        open.set(false);
        tokio::time::sleep(Duration::from_millis(5)).await;
        open.set(true);
    });

    rsx! {
        if *open.read() {
            AssistantModal {
                result: Category::Process,
                chat,
                on_close: move |()| open.set(false),
            }
        }
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub store: Arc<InMemorySessionStore>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

fn test_app(
    store: &Arc<InMemorySessionStore>,
    replies: Vec<Result<&'static str, ()>>,
) -> Arc<TestApp> {
    let diagnostic = Arc::new(DiagnosticService::new(store.clone()));
    let assistant = Arc::new(AssistantService::new(
        fixed_clock(),
        Arc::new(ScriptedBackend::new(replies)),
    ));

    Arc::new(TestApp {
        diagnostic,
        assistant,
    })
}

pub fn setup_harness(
    store: Arc<InMemorySessionStore>,
    replies: Vec<Result<&'static str, ()>>,
) -> ViewHarness {
    let app = test_app(&store, replies);
    let dom = VirtualDom::new_with_props(Harness, HarnessProps { app });

    ViewHarness { dom, store }
}

pub fn setup_modal_harness(replies: Vec<Result<&'static str, ()>>) -> ViewHarness {
    let store = Arc::new(InMemorySessionStore::new());
    let app = test_app(&store, replies);
    let dom = VirtualDom::new_with_props(ModalCycleHarness, HarnessProps { app });

    ViewHarness { dom, store }
}
