mod assistant_vm;
mod diagnostic_vm;

pub use assistant_vm::{AssistantVm, DisplayMessage, accept_input};
pub use diagnostic_vm::{DiagnosticVm, Step};
