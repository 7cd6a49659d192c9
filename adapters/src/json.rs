//! JSON file adapter.
//!
//! Reads a roster from a JSON array of user records on disk, so deployments can
//! swap the built-in staff list for their own without rebuilding.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::{validate_records, AdapterError, DirectoryAdapter, UserRecord};

#[derive(Debug, Clone)]
pub struct JsonFileDirectory {
    path: PathBuf,
}

impl JsonFileDirectory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DirectoryAdapter for JsonFileDirectory {
    fn name(&self) -> &str {
        "json"
    }

    async fn load(&self) -> Result<Vec<UserRecord>, AdapterError> {
        let contents = tokio::fs::read(&self.path)
            .await
            .map_err(|source| AdapterError::Io {
                path: self.path.clone(),
                source,
            })?;

        let records: Vec<UserRecord> =
            serde_json::from_slice(&contents).map_err(|source| AdapterError::Parse {
                path: self.path.clone(),
                source,
            })?;

        validate_records(&records)?;
        tracing::debug!(path = %self.path.display(), count = records.len(), "loaded roster file");
        Ok(records)
    }
}
