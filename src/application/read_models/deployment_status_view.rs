//! Deployment status read model

use crate::deployment_tracking::services::{ChartEntry, TaskIdFrequency};
use serde::Serialize;

/// Who rendered the report and when
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportMetadata {
    /// `YYYY-MM-DD HH:MM:SS`, UTC
    pub generated_at: String,
    pub tool_name: String,
    pub tool_version: String,
}

/// Filters in effect, in their command-line spelling
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedFilters {
    pub status: String,
    pub action: String,
    pub hostname: String,
}

/// Summary tiles; every count is shown, zeros included
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusTiles {
    pub filtered_total: usize,
    pub succeed: usize,
    pub running: usize,
    pub failed: usize,
}

/// One line of the task list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRow {
    pub task_id: String,
    pub hostname: String,
    pub owner: String,
    pub action: String,
    pub action_label: String,
    pub status: String,
    pub status_label: String,
    pub update_date: String,
}

/// Everything the deployment status view shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentStatusView {
    pub metadata: ReportMetadata,
    pub app_id: String,
    pub filters: AppliedFilters,
    /// Records returned by the lookup, before filtering
    pub total_count: usize,
    pub tiles: StatusTiles,
    pub status_chart: Vec<ChartEntry>,
    pub action_chart: Vec<ChartEntry>,
    pub top_task_ids: Vec<TaskIdFrequency>,
    /// Most recent parseable update time among the filtered tasks
    pub last_updated: Option<String>,
    pub tasks: Vec<TaskRow>,
}

impl DeploymentStatusView {
    /// True when the lookup itself returned nothing
    pub fn has_no_records(&self) -> bool {
        self.total_count == 0
    }

    pub fn filtered_count(&self) -> usize {
        self.tiles.filtered_total
    }
}
