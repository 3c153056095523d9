use crate::application::dto::CatalogQuery;
use crate::application::read_models::{CatalogView, ViewBuilder};
use crate::deployment_tracking::domain::SoftwareId;
use crate::ports::outbound::{ProgressReporter, SoftwareCatalog};
use crate::shared::error::TrackerError;
use crate::shared::Result;

/// Where the catalog sends the user when an entry is opened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTarget {
    pub app_id: SoftwareId,
    /// Deep link into the deployment status view
    pub link: String,
}

/// BrowseCatalogUseCase - Lists, filters and opens catalog entries
///
/// # Type Parameters
/// * `C` - SoftwareCatalog implementation
/// * `P` - ProgressReporter implementation
pub struct BrowseCatalogUseCase<C, P> {
    catalog: C,
    progress_reporter: P,
}

impl<C, P> BrowseCatalogUseCase<C, P>
where
    C: SoftwareCatalog,
    P: ProgressReporter,
{
    pub fn new(catalog: C, progress_reporter: P) -> Self {
        Self {
            catalog,
            progress_reporter,
        }
    }

    /// Builds the catalog view for `query`
    pub fn execute(&self, query: &CatalogQuery) -> Result<CatalogView> {
        let entries = self.catalog.list_software()?;
        self.progress_reporter
            .report(&format!("📦 Loaded {} catalog entr(ies)", entries.len()));

        let view = ViewBuilder::build_catalog(
            &entries,
            query,
            ViewBuilder::metadata(chrono::Utc::now()),
        );

        if view.is_empty() {
            self.progress_reporter
                .report_error("⚠️  No software matches the current filters.");
        }

        Ok(view)
    }

    /// Resolves the entry to open in the deployment status view
    ///
    /// # Errors
    /// Returns a validation error if the identifier is blank or not in the catalog.
    pub fn open(&self, raw_app_id: &str) -> Result<NavigationTarget> {
        let app_id = SoftwareId::new(raw_app_id)?;
        let entries = self.catalog.list_software()?;

        if !entries.iter().any(|s| s.app_id == app_id) {
            return Err(TrackerError::Validation {
                message: format!("Software ID \"{}\" is not in the catalog", app_id),
            }
            .into());
        }

        let link = ViewBuilder::status_link(&app_id);
        self.progress_reporter
            .report(&format!("➡️  Opening deployment status: {}", link));

        Ok(NavigationTarget { app_id, link })
    }
}
