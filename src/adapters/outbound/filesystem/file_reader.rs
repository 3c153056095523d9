use crate::adapters::outbound::memory::InMemoryStore;
use crate::deployment_tracking::domain::{DeploymentTask, Software};
use crate::shared::error::TrackerError;
use crate::shared::security::safe_read_to_string;
use crate::shared::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// On-disk dataset layout
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DatasetFile {
    #[serde(default)]
    software: Vec<Software>,
    #[serde(default)]
    deployments: HashMap<String, Vec<DeploymentTask>>,
}

/// JsonDatasetReader adapter for loading a dataset file
///
/// The file is read once, with the same security checks as every other
/// file read (no symlinks, regular files only, size cap), and served from
/// an [`InMemoryStore`].
pub struct JsonDatasetReader {
    path: PathBuf,
}

impl JsonDatasetReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the dataset
    ///
    /// # Errors
    /// Returns [`TrackerError::DatasetNotFound`] if the file doesn't exist and
    /// [`TrackerError::DatasetParseError`] if it can't be read or parsed.
    pub fn load(&self) -> Result<InMemoryStore> {
        if !self.path.exists() {
            return Err(TrackerError::DatasetNotFound {
                path: self.path.clone(),
                suggestion: format!(
                    "Dataset file \"{}\" does not exist.\n   \
                     Check the --data option or the data_file entry in your config file.",
                    self.path.display()
                ),
            }
            .into());
        }

        let content = safe_read_to_string(&self.path, "dataset file").map_err(|e| {
            TrackerError::DatasetParseError {
                path: self.path.clone(),
                details: e.to_string(),
            }
        })?;

        let dataset: DatasetFile =
            serde_json::from_str(&content).map_err(|e| TrackerError::DatasetParseError {
                path: self.path.clone(),
                details: e.to_string(),
            })?;

        Ok(InMemoryStore::new(dataset.software, dataset.deployments))
    }
}
