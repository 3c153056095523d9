//! Software catalog read model

use super::deployment_status_view::ReportMetadata;
use crate::deployment_tracking::services::CatalogSummary;
use serde::Serialize;

/// Route of the deployment status view; the identifier goes in `appId`
pub const DEPLOYMENT_STATUS_ROUTE: &str = "/deployment-status";

/// One catalog card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogRow {
    pub app_id: String,
    pub name: String,
    pub version: String,
    pub owner: String,
    pub listed: bool,
    pub status_label: String,
    /// Deep link into the deployment status view for this entry
    pub status_link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogView {
    pub metadata: ReportMetadata,
    pub search_term: String,
    pub status_filter: String,
    pub summary: CatalogSummary,
    pub entries: Vec<CatalogRow>,
}

impl CatalogView {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
