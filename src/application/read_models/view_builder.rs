//! Builder for constructing read models from domain objects

use super::catalog_view::{CatalogRow, CatalogView, DEPLOYMENT_STATUS_ROUTE};
use super::deployment_status_view::{
    AppliedFilters, DeploymentStatusView, ReportMetadata, StatusTiles, TaskRow,
};
use crate::application::dto::CatalogQuery;
use crate::deployment_tracking::domain::{
    DeploymentTask, FilterCriteria, Software, SoftwareId,
};
use crate::deployment_tracking::services::{
    CatalogFilter, CatalogSummary, TaskAggregator, TaskFilter,
};
use chrono::{DateTime, NaiveDateTime, Utc};

/// Display format of task update times
pub const UPDATE_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// ViewBuilder - Turns lookup results and catalog entries into read models
///
/// Every number in a view is derived from the filtered set at build time;
/// views hold no state of their own.
pub struct ViewBuilder;

impl ViewBuilder {
    pub fn metadata(now: DateTime<Utc>) -> ReportMetadata {
        ReportMetadata {
            generated_at: now.format(UPDATE_DATE_FORMAT).to_string(),
            tool_name: env!("CARGO_PKG_NAME").to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Builds the deployment status view
    ///
    /// # Arguments
    /// * `app_id` - Identifier the tasks were resolved from
    /// * `tasks` - Full lookup result, unfiltered
    /// * `criteria` - Filters to apply before aggregating
    /// * `top_limit` - Size of the task identifier ranking
    /// * `metadata` - Report metadata
    pub fn build_status(
        app_id: &SoftwareId,
        tasks: &[DeploymentTask],
        criteria: &FilterCriteria,
        top_limit: usize,
        metadata: ReportMetadata,
    ) -> DeploymentStatusView {
        let filtered = TaskFilter::new(criteria.clone()).apply(tasks);

        let status_counts = TaskAggregator::status_counts(&filtered);
        let action_counts = TaskAggregator::action_counts(&filtered);

        DeploymentStatusView {
            metadata,
            app_id: app_id.to_string(),
            filters: AppliedFilters {
                status: criteria.status.to_string(),
                action: criteria.action.to_string(),
                hostname: criteria.hostname.trim().to_string(),
            },
            total_count: tasks.len(),
            tiles: StatusTiles {
                filtered_total: filtered.len(),
                succeed: status_counts.succeed,
                running: status_counts.running,
                failed: status_counts.failed,
            },
            status_chart: TaskAggregator::status_series(&status_counts),
            action_chart: TaskAggregator::action_series(&action_counts),
            top_task_ids: TaskAggregator::top_task_ids(&filtered, top_limit),
            last_updated: Self::latest_update(&filtered),
            tasks: filtered.iter().map(Self::task_row).collect(),
        }
    }

    /// Builds the catalog view
    pub fn build_catalog(
        entries: &[Software],
        query: &CatalogQuery,
        metadata: ReportMetadata,
    ) -> CatalogView {
        let filter = CatalogFilter::new(&query.search_term, query.status);

        CatalogView {
            metadata,
            search_term: query.search_term.clone(),
            status_filter: query.status.to_string(),
            summary: CatalogSummary::from_entries(entries),
            entries: filter
                .apply(entries)
                .iter()
                .map(Self::catalog_row)
                .collect(),
        }
    }

    /// Deep link into the deployment status view for `app_id`
    pub fn status_link(app_id: &SoftwareId) -> String {
        format!(
            "{}?appId={}",
            DEPLOYMENT_STATUS_ROUTE,
            urlencoding::encode(app_id.as_str())
        )
    }

    fn task_row(task: &DeploymentTask) -> TaskRow {
        TaskRow {
            task_id: task.task_id.clone(),
            hostname: task.hostname.clone(),
            owner: task.owner.clone(),
            action: task.action.as_str().to_string(),
            action_label: task.action.label().to_string(),
            status: task.status.as_str().to_string(),
            status_label: task.status.label().to_string(),
            update_date: task.update_date.clone(),
        }
    }

    fn catalog_row(software: &Software) -> CatalogRow {
        CatalogRow {
            app_id: software.app_id.to_string(),
            name: software.name.clone(),
            version: software.version.clone(),
            owner: software.owner.clone(),
            listed: software.is_listed(),
            status_label: software.status.label().to_string(),
            status_link: Self::status_link(&software.app_id),
        }
    }

    /// Update times that don't follow the display format are skipped
    fn latest_update(tasks: &[DeploymentTask]) -> Option<String> {
        tasks
            .iter()
            .filter_map(|t| NaiveDateTime::parse_from_str(&t.update_date, UPDATE_DATE_FORMAT).ok())
            .max()
            .map(|latest| latest.format(UPDATE_DATE_FORMAT).to_string())
    }
}
