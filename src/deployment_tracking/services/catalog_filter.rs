use crate::deployment_tracking::domain::{CatalogStatusFilter, Software};
use serde::Serialize;

/// Tile counts for the catalog view, taken over the unfiltered catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    pub total: usize,
    pub listed: usize,
    pub unlisted: usize,
}

impl CatalogSummary {
    pub fn from_entries(entries: &[Software]) -> Self {
        let listed = entries.iter().filter(|s| s.is_listed()).count();
        Self {
            total: entries.len(),
            listed,
            unlisted: entries.len() - listed,
        }
    }
}

/// CatalogFilter - Free-text and listing-status filter for software entries
///
/// The search term matches name, identifier or owner, case-insensitively.
/// An empty term matches everything.
#[derive(Debug, Clone)]
pub struct CatalogFilter {
    term: String,
    status: CatalogStatusFilter,
}

impl CatalogFilter {
    pub fn new(term: &str, status: CatalogStatusFilter) -> Self {
        Self {
            term: term.to_lowercase(),
            status,
        }
    }

    pub fn matches(&self, software: &Software) -> bool {
        let matches_search = software.name.to_lowercase().contains(&self.term)
            || software.app_id.as_str().to_lowercase().contains(&self.term)
            || software.owner.to_lowercase().contains(&self.term);

        matches_search && self.status.accepts(software.status)
    }

    pub fn apply(&self, entries: &[Software]) -> Vec<Software> {
        entries.iter().filter(|s| self.matches(s)).cloned().collect()
    }
}
