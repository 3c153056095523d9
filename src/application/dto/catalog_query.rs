use crate::deployment_tracking::domain::CatalogStatusFilter;

/// CatalogQuery - Request DTO for the catalog view
#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
    /// Free-text term matched against name, identifier and owner
    pub search_term: String,
    pub status: CatalogStatusFilter,
}

impl CatalogQuery {
    pub fn new(search_term: impl Into<String>, status: CatalogStatusFilter) -> Self {
        Self {
            search_term: search_term.into(),
            status,
        }
    }
}
