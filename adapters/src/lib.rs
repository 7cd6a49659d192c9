//! Core `adapters` crate for abstracting where dashboard identities come from.
//!
//! This crate defines the `DirectoryAdapter` trait, which outlines how the backend
//! obtains the user records a session can switch between, and provides the concrete
//! implementations (the built-in seed roster and a JSON file on disk).

pub mod errors;
pub mod json;
pub mod models;
pub mod seed;

use async_trait::async_trait;

pub use errors::AdapterError;
pub use json::JsonFileDirectory;
pub use models::UserRecord;
pub use seed::SeedDirectory;

/// A source of user records.
///
/// Implementations are read once at startup; the backend keeps the loaded roster in
/// memory for the lifetime of the process.
#[async_trait]
pub trait DirectoryAdapter: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Loads every user record. Ids are unique and non-empty in the returned list.
    async fn load(&self) -> Result<Vec<UserRecord>, AdapterError>;
}

/// Checks that every record has a non-empty id and that no id is repeated.
pub fn validate_records(records: &[UserRecord]) -> Result<(), AdapterError> {
    let mut seen = std::collections::HashSet::new();
    for (index, record) in records.iter().enumerate() {
        if record.id.trim().is_empty() {
            return Err(AdapterError::MissingId { index });
        }
        if !seen.insert(record.id.as_str()) {
            return Err(AdapterError::DuplicateId(record.id.clone()));
        }
    }
    Ok(())
}
