mod assistant_modal;
mod diagnostic;
mod state;

#[cfg(test)]
pub mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use assistant_modal::AssistantModal;
pub use diagnostic::DiagnosticView;
pub use state::ViewError;
