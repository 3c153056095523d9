use crate::deployment_tracking::domain::{
    ActionFilter, DeploymentTask, FilterCriteria, StatusFilter,
};

/// TaskFilter - Narrows a task list by status, action and hostname
///
/// All three constraints must hold for a task to be kept. Output keeps the
/// input order.
#[derive(Debug, Clone)]
pub struct TaskFilter {
    criteria: FilterCriteria,
    /// Lowercased hostname needle, `None` when the filter is blank
    hostname_needle: Option<String>,
}

impl TaskFilter {
    pub fn new(criteria: FilterCriteria) -> Self {
        let hostname_needle = if criteria.hostname.trim().is_empty() {
            None
        } else {
            Some(criteria.hostname.to_lowercase())
        };

        Self {
            criteria,
            hostname_needle,
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Checks a single task against every active constraint
    pub fn matches(&self, task: &DeploymentTask) -> bool {
        if !self.criteria.status.accepts(&task.status) {
            return false;
        }

        if !self.criteria.action.accepts(&task.action) {
            return false;
        }

        match &self.hostname_needle {
            Some(needle) => task.hostname.to_lowercase().contains(needle.as_str()),
            None => true,
        }
    }

    /// Returns the tasks that pass the filter, in input order
    pub fn apply(&self, tasks: &[DeploymentTask]) -> Vec<DeploymentTask> {
        tasks.iter().filter(|t| self.matches(t)).cloned().collect()
    }
}

/// Filters `tasks` by the three independent selectors
///
/// Convenience wrapper over [`TaskFilter`] for callers holding the
/// selectors separately.
pub fn apply_filters(
    tasks: &[DeploymentTask],
    status_filter: &StatusFilter,
    action_filter: &ActionFilter,
    hostname_filter: &str,
) -> Vec<DeploymentTask> {
    let criteria = FilterCriteria::new(
        status_filter.clone(),
        action_filter.clone(),
        hostname_filter,
    );
    TaskFilter::new(criteria).apply(tasks)
}
