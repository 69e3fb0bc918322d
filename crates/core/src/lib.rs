#![forbid(unsafe_code)]

pub mod engine;
pub mod model;
pub mod time;

pub use engine::{AnswerOutcome, DiagnosticEngine, EngineError, RunPhase};
pub use time::Clock;
