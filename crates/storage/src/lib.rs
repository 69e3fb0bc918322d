#![forbid(unsafe_code)]

pub mod repository;
pub mod sqlite;

pub use repository::{InMemorySessionStore, SessionStateRepository, Storage, StorageError};
pub use sqlite::{SqliteInitError, SqliteRepository};
