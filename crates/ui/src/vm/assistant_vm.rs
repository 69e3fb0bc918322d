use diagnostic_core::model::{Category, ChatRole};
use services::{
    APOLOGY_FALLBACK, AssistantChat, AssistantService, GREETING_FALLBACK, GREETING_PROMPT,
};

/// One transcript entry as shown in the modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayMessage {
    pub role: ChatRole,
    pub text: String,
}

impl DisplayMessage {
    fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    fn model(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn is_user(&self) -> bool {
        self.role == ChatRole::User
    }
}

/// Normalize send-box input. Empty or whitespace-only input is silently
/// ignored, not an error.
#[must_use]
pub fn accept_input(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Owns the assistant conversation handle and the displayed transcript,
/// substituting the fixed fallback strings when a collaborator call fails.
#[derive(Clone)]
pub struct AssistantVm {
    chat: AssistantChat,
    messages: Vec<DisplayMessage>,
}

impl AssistantVm {
    /// Open a conversation for the given result and issue the fixed greeting
    /// prompt. The greeting prompt itself is not displayed; a failure yields
    /// exactly the greeting fallback as the sole message.
    pub async fn open(service: &AssistantService, result: Category) -> Self {
        let mut chat = service.open(result);
        let first = match service.send(&mut chat, GREETING_PROMPT).await {
            Ok(reply) => reply,
            Err(err) => {
                eprintln!("assistant greeting failed: {err}");
                GREETING_FALLBACK.to_string()
            }
        };
        Self {
            chat,
            messages: vec![DisplayMessage::model(first)],
        }
    }

    /// Echo the user's turn into the transcript before the reply arrives.
    pub fn push_user(&mut self, text: &str) {
        self.messages.push(DisplayMessage::user(text));
    }

    /// Fetch the model's reply for a user turn already echoed with
    /// `push_user`. A failure appends exactly the apology fallback; prior
    /// transcript entries are never lost.
    pub async fn request_reply(&mut self, service: &AssistantService, text: &str) {
        let reply = match service.send(&mut self.chat, text).await {
            Ok(reply) => reply,
            Err(err) => {
                eprintln!("assistant reply failed: {err}");
                APOLOGY_FALLBACK.to_string()
            }
        };
        self.messages.push(DisplayMessage::model(reply));
    }

    #[must_use]
    pub fn messages(&self) -> &[DisplayMessage] {
        &self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use diagnostic_core::model::ChatMessage;
    use diagnostic_core::time::fixed_clock;
    use services::{AssistantError, ChatBackend};

    struct ScriptedBackend {
        replies: Vec<Result<&'static str, ()>>,
        calls: AtomicUsize,
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

    fn service(replies: Vec<Result<&'static str, ()>>) -> AssistantService {
        AssistantService::new(
            fixed_clock(),
            Arc::new(ScriptedBackend {
                replies,
                calls: AtomicUsize::new(0),
            }),
        )
    }

    #[tokio::test]
    async fn successful_greeting_is_the_sole_first_message() {
        let service = service(vec![Ok("Welcome. Your result points to process friction.")]);
        let vm = AssistantVm::open(&service, Category::Process).await;

        assert_eq!(vm.messages().len(), 1);
        assert!(!vm.messages()[0].is_user());
        assert_eq!(
            vm.messages()[0].text,
            "Welcome. Your result points to process friction."
        );
    }

    #[tokio::test]
    async fn failed_greeting_substitutes_the_greeting_fallback() {
        let service = service(vec![Err(())]);
        let vm = AssistantVm::open(&service, Category::Role).await;

        assert_eq!(vm.messages().len(), 1);
        assert_eq!(vm.messages()[0].text, GREETING_FALLBACK);
    }

    #[tokio::test]
    async fn failed_later_turn_appends_the_apology_without_losing_history() {
        let service = service(vec![Ok("Greeting reply."), Err(())]);
        let mut vm = AssistantVm::open(&service, Category::Visibility).await;

        vm.push_user("Why does this happen?");
        vm.request_reply(&service, "Why does this happen?").await;

        let texts: Vec<&str> = vm.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["Greeting reply.", "Why does this happen?", APOLOGY_FALLBACK]
        );
    }

    #[tokio::test]
    async fn successful_turn_appends_user_and_reply_in_order() {
        let service = service(vec![Ok("Greeting reply."), Ok("Because handoffs drift.")]);
        let mut vm = AssistantVm::open(&service, Category::Process).await;

        vm.push_user("Why?");
        vm.request_reply(&service, "Why?").await;

        assert_eq!(vm.messages().len(), 3);
        assert!(vm.messages()[1].is_user());
        assert_eq!(vm.messages()[2].text, "Because handoffs drift.");
    }

    #[test]
    fn blank_input_is_ignored() {
        assert_eq!(accept_input(""), None);
        assert_eq!(accept_input("   \n\t"), None);
        assert_eq!(accept_input("  why?  "), Some("why?".to_string()));
    }
}
