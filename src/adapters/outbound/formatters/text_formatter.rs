use crate::application::read_models::{CatalogView, DeploymentStatusView, TaskRow};
use crate::deployment_tracking::services::ChartEntry;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use owo_colors::{OwoColorize, Style};

/// Width of the longest bar in a chart
const BAR_WIDTH: usize = 30;

const RULE: &str = "────────────────────────────────────────────────────────────";

/// TextFormatter adapter for the terminal dashboard
///
/// Renders tiles, bar charts and the task list as plain text, colored with
/// ANSI escapes when `color` is set.
pub struct TextFormatter {
    color: bool,
}

impl TextFormatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.color {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    fn status_style(status: &str) -> Style {
        match status {
            "SUCCEED" => Style::new().green(),
            "RUNNING" => Style::new().yellow(),
            "FAILED" => Style::new().red(),
            _ => Style::new().dimmed(),
        }
    }

    fn heading(&self, output: &mut String, title: &str) {
        output.push_str(&self.paint(title, Style::new().bold().underline()));
        output.push('\n');
    }

    fn render_tiles(&self, output: &mut String, view: &DeploymentStatusView) {
        let tiles = [
            ("Total", view.tiles.filtered_total, Style::new().bold()),
            ("Succeeded", view.tiles.succeed, Style::new().green().bold()),
            ("Running", view.tiles.running, Style::new().yellow().bold()),
            ("Failed", view.tiles.failed, Style::new().red().bold()),
        ];

        let line = tiles
            .iter()
            .map(|(label, count, style)| {
                format!("{}: {}", label, self.paint(&count.to_string(), *style))
            })
            .collect::<Vec<_>>()
            .join("   ");
        output.push_str(&format!("  {}\n\n", line));
    }

    /// Horizontal bar chart; bars are scaled to the largest count
    fn render_chart(&self, output: &mut String, title: &str, entries: &[ChartEntry]) {
        if entries.is_empty() {
            return;
        }

        self.heading(output, title);
        let max = entries.iter().map(|e| e.count).max().unwrap_or(1).max(1);
        let label_width = entries.iter().map(|e| e.label.len()).max().unwrap_or(0);

        for entry in entries {
            let len = (entry.count * BAR_WIDTH).div_ceil(max);
            let bar = "█".repeat(len);
            output.push_str(&format!(
                "  {:<width$}  {} {}\n",
                entry.label,
                self.paint(&bar, Style::new().cyan()),
                entry.count,
                width = label_width
            ));
        }
        output.push('\n');
    }

    fn render_tasks(&self, output: &mut String, tasks: &[TaskRow]) {
        self.heading(output, "Tasks");
        if tasks.is_empty() {
            output.push_str("  No tasks match the current filters.\n");
            return;
        }

        let id_width = tasks.iter().map(|t| t.task_id.len()).max().unwrap_or(0);
        let host_width = tasks.iter().map(|t| t.hostname.len()).max().unwrap_or(0);
        let owner_width = tasks.iter().map(|t| t.owner.len()).max().unwrap_or(0);

        for task in tasks {
            // pad before painting so escapes don't count toward the width
            let status = format!("{:<9}", task.status_label);
            output.push_str(&format!(
                "  {:<id_width$}  {:<host_width$}  {:<owner_width$}  {:<9}  {}  {}\n",
                task.task_id,
                task.hostname,
                task.owner,
                task.action_label,
                self.paint(&status, Self::status_style(&task.status)),
                task.update_date,
            ));
        }
    }
}

impl ReportFormatter for TextFormatter {
    fn format_status(&self, view: &DeploymentStatusView) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {}\n{}\n",
            self.paint("Deployment Status:", Style::new().bold()),
            self.paint(&view.app_id, Style::new().cyan().bold()),
            RULE
        ));

        if view.has_no_records() {
            output.push_str(&format!(
                "\n  {}\n  Please check the software ID \"{}\" and try again.\n",
                self.paint("No deployment records found.", Style::new().red()),
                view.app_id
            ));
            return Ok(output);
        }

        let hostname = if view.filters.hostname.is_empty() {
            "(any)"
        } else {
            view.filters.hostname.as_str()
        };
        output.push_str(&format!(
            "  Filters: status={} action={} host={}\n",
            view.filters.status, view.filters.action, hostname
        ));
        output.push_str(&format!(
            "  Showing {} / {} record(s)\n",
            view.filtered_count(),
            view.total_count
        ));
        if let Some(last_updated) = &view.last_updated {
            output.push_str(&format!("  Last updated: {}\n", last_updated));
        }
        output.push('\n');

        self.render_tiles(&mut output, view);
        self.render_chart(&mut output, "Status Distribution", &view.status_chart);
        self.render_chart(&mut output, "Action Distribution", &view.action_chart);

        if !view.top_task_ids.is_empty() {
            self.heading(&mut output, "Top Task IDs");
            for (rank, item) in view.top_task_ids.iter().enumerate() {
                output.push_str(&format!("  {:>2}. {} ({})\n", rank + 1, item.task_id, item.count));
            }
            output.push('\n');
        }

        self.render_tasks(&mut output, &view.tasks);
        Ok(output)
    }

    fn format_catalog(&self, view: &CatalogView) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!(
            "{}\n{}\n",
            self.paint("Software Catalog", Style::new().bold()),
            RULE
        ));
        output.push_str(&format!(
            "  Total: {}   Listed: {}   Unlisted: {}\n",
            self.paint(&view.summary.total.to_string(), Style::new().bold()),
            self.paint(&view.summary.listed.to_string(), Style::new().green().bold()),
            self.paint(&view.summary.unlisted.to_string(), Style::new().dimmed()),
        ));
        if !view.search_term.is_empty() {
            output.push_str(&format!("  Search: \"{}\"\n", view.search_term));
        }
        output.push_str(&format!("  Status: {}\n\n", view.status_filter));

        if view.is_empty() {
            output.push_str("  No software matches the current filters.\n");
            return Ok(output);
        }

        for entry in &view.entries {
            let badge = format!("[{}]", entry.status_label);
            let badge_style = if entry.listed {
                Style::new().green()
            } else {
                Style::new().dimmed()
            };
            output.push_str(&format!(
                "  {} {}\n    ID: {}   Version: {}   Owner: {}\n    → {}\n",
                self.paint(&entry.name, Style::new().bold()),
                self.paint(&badge, badge_style),
                entry.app_id,
                entry.version,
                entry.owner,
                entry.status_link
            ));
        }

        Ok(output)
    }
}
