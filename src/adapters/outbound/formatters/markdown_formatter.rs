use crate::application::read_models::{CatalogView, DeploymentStatusView, ReportMetadata, TaskRow};
use crate::deployment_tracking::services::{ChartEntry, TaskIdFrequency};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Markdown table header for the task list
const TASK_TABLE_HEADER: &str = "| Task ID | Hostname | Owner | Action | Status | Updated |\n";

/// Markdown table separator line for the task list
const TASK_TABLE_SEPARATOR: &str = "|---------|----------|-------|--------|--------|---------|\n";

/// Markdown table header for catalog entries
const CATALOG_TABLE_HEADER: &str = "| Name | Status | ID | Version | Owner | Deployments |\n";

/// Markdown table separator line for catalog entries
const CATALOG_TABLE_SEPARATOR: &str = "|------|--------|----|---------|-------|-------------|\n";

/// MarkdownFormatter adapter for rendering views as Markdown reports
///
/// This adapter implements the ReportFormatter port for Markdown format.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn render_generated_by(&self, output: &mut String, metadata: &ReportMetadata) {
        output.push_str(&format!(
            "*Generated by {} v{} at {} UTC*\n\n",
            metadata.tool_name, metadata.tool_version, metadata.generated_at
        ));
    }

    fn render_filters(&self, output: &mut String, view: &DeploymentStatusView) {
        let hostname = if view.filters.hostname.is_empty() {
            "(any)".to_string()
        } else {
            format!("`{}`", view.filters.hostname)
        };

        output.push_str("## Filters\n\n");
        output.push_str(&format!("- **Status:** {}\n", view.filters.status));
        output.push_str(&format!("- **Action:** {}\n", view.filters.action));
        output.push_str(&format!("- **Hostname:** {}\n\n", hostname));
        output.push_str(&format!(
            "Showing **{}** / **{}** record(s)\n\n",
            view.filtered_count(),
            view.total_count
        ));
    }

    fn render_tiles(&self, output: &mut String, view: &DeploymentStatusView) {
        output.push_str("## Summary\n\n");
        output.push_str("| Total | Succeeded | Running | Failed |\n");
        output.push_str("|-------|-----------|---------|--------|\n");
        output.push_str(&format!(
            "| {} | {} | {} | {} |\n\n",
            view.tiles.filtered_total, view.tiles.succeed, view.tiles.running, view.tiles.failed
        ));
        if let Some(last_updated) = &view.last_updated {
            output.push_str(&format!("Last updated: {}\n\n", last_updated));
        }
    }

    fn render_chart(&self, output: &mut String, title: &str, entries: &[ChartEntry]) {
        if entries.is_empty() {
            return;
        }

        output.push_str(&format!("## {}\n\n", title));
        output.push_str("| Label | Count |\n");
        output.push_str("|-------|-------|\n");
        for entry in entries {
            output.push_str(&format!("| {} | {} |\n", entry.label, entry.count));
        }
        output.push('\n');
    }

    fn render_top_task_ids(&self, output: &mut String, top: &[TaskIdFrequency]) {
        if top.is_empty() {
            return;
        }

        output.push_str("## Top Task IDs\n\n");
        for (rank, item) in top.iter().enumerate() {
            output.push_str(&format!(
                "{}. `{}` ({})\n",
                rank + 1,
                Self::escape_markdown_table_cell(&item.task_id),
                item.count
            ));
        }
        output.push('\n');
    }

    fn render_tasks(&self, output: &mut String, tasks: &[TaskRow]) {
        output.push_str("## Tasks\n\n");
        if tasks.is_empty() {
            output.push_str("*No tasks match the current filters.*\n");
            return;
        }

        output.push_str(TASK_TABLE_HEADER);
        output.push_str(TASK_TABLE_SEPARATOR);
        for task in tasks {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&task.task_id),
                Self::escape_markdown_table_cell(&task.hostname),
                Self::escape_markdown_table_cell(&task.owner),
                Self::escape_markdown_table_cell(&task.action_label),
                Self::escape_markdown_table_cell(&task.status_label),
                Self::escape_markdown_table_cell(&task.update_date),
            ));
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format_status(&self, view: &DeploymentStatusView) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!(
            "# Deployment Status: {}\n\n",
            Self::escape_markdown_table_cell(&view.app_id)
        ));
        self.render_generated_by(&mut output, &view.metadata);

        if view.has_no_records() {
            output.push_str(&format!(
                "> No deployment records found for software ID `{}`. Please check the ID and try again.\n",
                view.app_id
            ));
            return Ok(output);
        }

        self.render_filters(&mut output, view);
        self.render_tiles(&mut output, view);
        self.render_chart(&mut output, "Status Distribution", &view.status_chart);
        self.render_chart(&mut output, "Action Distribution", &view.action_chart);
        self.render_top_task_ids(&mut output, &view.top_task_ids);
        self.render_tasks(&mut output, &view.tasks);

        Ok(output)
    }

    fn format_catalog(&self, view: &CatalogView) -> Result<String> {
        let mut output = String::new();

        output.push_str("# Software Catalog\n\n");
        self.render_generated_by(&mut output, &view.metadata);

        output.push_str("| Total | Listed | Unlisted |\n");
        output.push_str("|-------|--------|----------|\n");
        output.push_str(&format!(
            "| {} | {} | {} |\n\n",
            view.summary.total, view.summary.listed, view.summary.unlisted
        ));

        if !view.search_term.is_empty() {
            output.push_str(&format!(
                "- **Search:** `{}`\n",
                Self::escape_markdown_table_cell(&view.search_term)
            ));
        }
        output.push_str(&format!("- **Status:** {}\n\n", view.status_filter));

        if view.is_empty() {
            output.push_str("*No software matches the current filters.*\n");
            return Ok(output);
        }

        output.push_str(CATALOG_TABLE_HEADER);
        output.push_str(CATALOG_TABLE_SEPARATOR);
        for entry in &view.entries {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | [View status]({}) |\n",
                Self::escape_markdown_table_cell(&entry.name),
                entry.status_label,
                Self::escape_markdown_table_cell(&entry.app_id),
                Self::escape_markdown_table_cell(&entry.version),
                Self::escape_markdown_table_cell(&entry.owner),
                entry.status_link,
            ));
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::memory::InMemoryStore;
    use crate::application::dto::CatalogQuery;
    use crate::application::read_models::ViewBuilder;
    use crate::deployment_tracking::domain::{
        ActionFilter, CatalogStatusFilter, FilterCriteria, SoftwareId, StatusFilter,
    };
    use crate::ports::outbound::SoftwareCatalog;

    fn metadata() -> ReportMetadata {
        ReportMetadata {
            generated_at: "2025-06-05 12:00:00".to_string(),
            tool_name: "deploy-tracker".to_string(),
            tool_version: "0.1.0".to_string(),
        }
    }

    fn status_view(app_id: &str, criteria: FilterCriteria) -> DeploymentStatusView {
        let store = InMemoryStore::fixture().unwrap();
        let app_id = SoftwareId::new(app_id).unwrap();
        let tasks = store.tasks_for(&app_id);
        ViewBuilder::build_status(&app_id, &tasks, &criteria, 10, metadata())
    }

    #[test]
    fn test_escape_markdown_table_cell() {
        assert_eq!(
            MarkdownFormatter::escape_markdown_table_cell("a|b\nc"),
            "a\\|b c"
        );
    }

    #[test]
    fn test_format_status_sections() {
        let view = status_view("sw-001", FilterCriteria::cleared());
        let output = MarkdownFormatter::new().format_status(&view).unwrap();

        assert!(output.starts_with("# Deployment Status: sw-001\n"));
        assert!(output.contains("Showing **5** / **5** record(s)"));
        assert!(output.contains("| 5 | 3 | 1 | 1 |"));
        assert!(output.contains("## Status Distribution"));
        assert!(output.contains("| T001-20250604143126-001 | server-01.company.com |"));
        assert!(output.contains("Last updated: 2025-06-05 12:45:30"));

        let summary = output.find("## Summary").unwrap();
        let tasks = output.find("## Tasks").unwrap();
        assert!(summary < tasks);
    }

    #[test]
    fn test_format_status_omits_empty_charts() {
        let criteria = FilterCriteria::new(
            StatusFilter::All,
            ActionFilter::All,
            "nonexistent",
        );
        let output = MarkdownFormatter::new()
            .format_status(&status_view("sw-001", criteria))
            .unwrap();

        assert!(output.contains("Showing **0** / **5** record(s)"));
        assert!(!output.contains("## Status Distribution"));
        assert!(!output.contains("## Top Task IDs"));
        assert!(output.contains("*No tasks match the current filters.*"));
    }

    #[test]
    fn test_format_status_empty_state() {
        let output = MarkdownFormatter::new()
            .format_status(&status_view("sw-999", FilterCriteria::cleared()))
            .unwrap();

        assert!(output.contains("No deployment records found for software ID `sw-999`"));
        assert!(!output.contains("## Summary"));
    }

    #[test]
    fn test_format_catalog() {
        let store = InMemoryStore::fixture().unwrap();
        let entries = store.list_software().unwrap();
        let view = ViewBuilder::build_catalog(
            &entries,
            &CatalogQuery::new("scanner", CatalogStatusFilter::All),
            metadata(),
        );
        let output = MarkdownFormatter::new().format_catalog(&view).unwrap();

        assert!(output.contains("| 5 | 4 | 1 |"));
        assert!(output.contains("- **Search:** `scanner`"));
        assert!(output.contains(
            "| SecurityScanner | Listed | sw-004 | 1.5.3 | user_22222 | [View status](/deployment-status?appId=sw-004) |"
        ));
        assert!(!output.contains("AwesomeApp"));
    }

    #[test]
    fn test_format_catalog_empty_state() {
        let view = ViewBuilder::build_catalog(
            &[],
            &CatalogQuery::default(),
            metadata(),
        );
        let output = MarkdownFormatter::new().format_catalog(&view).unwrap();
        assert!(output.contains("*No software matches the current filters.*"));
    }
}
