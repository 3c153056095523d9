use crate::application::read_models::{CatalogView, DeploymentStatusView};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;

/// JsonFormatter adapter for machine-readable output
///
/// Serializes the read models as pretty-printed JSON.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn to_json<T: Serialize>(value: &T) -> Result<String> {
        let mut json = serde_json::to_string_pretty(value)?;
        json.push('\n');
        Ok(json)
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format_status(&self, view: &DeploymentStatusView) -> Result<String> {
        Self::to_json(view)
    }

    fn format_catalog(&self, view: &CatalogView) -> Result<String> {
        Self::to_json(view)
    }
}
