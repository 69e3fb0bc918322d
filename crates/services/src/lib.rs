#![forbid(unsafe_code)]

pub mod assistant_service;
pub mod diagnostic_service;
pub mod error;

pub use diagnostic_core::Clock;

pub use assistant_service::{
    APOLOGY_FALLBACK, AssistantChat, AssistantConfig, AssistantService, ChatBackend,
    GREETING_FALLBACK, GREETING_PROMPT, HttpChatBackend,
};
pub use diagnostic_service::{DiagnosticAnswerResult, DiagnosticService};
pub use error::{AssistantError, DiagnosticError};
