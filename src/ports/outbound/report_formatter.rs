use crate::application::read_models::{CatalogView, DeploymentStatusView};
use crate::shared::Result;

/// ReportFormatter port for rendering views
///
/// This port abstracts the rendering of both views into an output format
/// (colored terminal text, Markdown, JSON).
pub trait ReportFormatter {
    /// Renders the deployment status view
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format_status(&self, view: &DeploymentStatusView) -> Result<String>;

    /// Renders the software catalog view
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format_catalog(&self, view: &CatalogView) -> Result<String>;
}
