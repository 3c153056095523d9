use crate::shared::error::TrackerError;
use crate::shared::Result;
use serde::{Deserialize, Serialize};

/// NewType wrapper for a software identifier (e.g. `sw-001`)
///
/// Construction trims surrounding whitespace and rejects empty input, so a
/// `SoftwareId` is always a usable lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SoftwareId(String);

impl SoftwareId {
    pub fn new(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TrackerError::Validation {
                message: "Software ID cannot be empty".to_string(),
            }
            .into());
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SoftwareId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for SoftwareId {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<SoftwareId> for String {
    fn from(id: SoftwareId) -> Self {
        id.0
    }
}

/// Whether a catalog entry is published
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListingStatus {
    #[serde(rename = "Y")]
    Listed,
    #[serde(rename = "N")]
    Unlisted,
}

impl ListingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ListingStatus::Listed => "Listed",
            ListingStatus::Unlisted => "Unlisted",
        }
    }
}

/// Software catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Software {
    #[serde(rename = "appID")]
    pub app_id: SoftwareId,
    #[serde(rename = "appversion")]
    pub version: String,
    pub name: String,
    pub owner: String,
    pub status: ListingStatus,
}

impl Software {
    pub fn new(
        app_id: &str,
        version: &str,
        name: &str,
        owner: &str,
        status: ListingStatus,
    ) -> Result<Self> {
        Ok(Self {
            app_id: SoftwareId::new(app_id)?,
            version: version.to_string(),
            name: name.to_string(),
            owner: owner.to_string(),
            status,
        })
    }

    pub fn is_listed(&self) -> bool {
        self.status == ListingStatus::Listed
    }
}
