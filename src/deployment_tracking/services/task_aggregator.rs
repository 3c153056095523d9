use crate::deployment_tracking::domain::{DeploymentTask, TaskAction, TaskStatus};
use serde::Serialize;
use std::collections::HashMap;

/// Default number of task identifiers kept by [`TaskAggregator::top_task_ids`]
pub const DEFAULT_TOP_LIMIT: usize = 10;

/// Per-status counts over the three known statuses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub succeed: usize,
    pub running: usize,
    pub failed: usize,
}

impl StatusCounts {
    pub fn get(&self, status: &TaskStatus) -> usize {
        match status {
            TaskStatus::Succeed => self.succeed,
            TaskStatus::Running => self.running,
            TaskStatus::Failed => self.failed,
            TaskStatus::Unknown(_) => 0,
        }
    }

    pub fn known_total(&self) -> usize {
        self.succeed + self.running + self.failed
    }
}

/// Per-action counts over the three known actions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ActionCounts {
    pub install: usize,
    pub update: usize,
    pub uninstall: usize,
}

impl ActionCounts {
    pub fn get(&self, action: &TaskAction) -> usize {
        match action {
            TaskAction::Install => self.install,
            TaskAction::Update => self.update,
            TaskAction::Uninstall => self.uninstall,
            TaskAction::Other(_) => 0,
        }
    }
}

/// One bar/slice of a chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartEntry {
    pub label: String,
    pub count: usize,
}

/// A task identifier and how many records carry it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskIdFrequency {
    pub task_id: String,
    pub count: usize,
}

/// TaskAggregator - Summary counts and chart series over a task list
pub struct TaskAggregator;

impl TaskAggregator {
    pub fn status_counts(tasks: &[DeploymentTask]) -> StatusCounts {
        tasks
            .iter()
            .fold(StatusCounts::default(), |mut counts, task| {
                match task.status {
                    TaskStatus::Succeed => counts.succeed += 1,
                    TaskStatus::Running => counts.running += 1,
                    TaskStatus::Failed => counts.failed += 1,
                    TaskStatus::Unknown(_) => {}
                }
                counts
            })
    }

    pub fn action_counts(tasks: &[DeploymentTask]) -> ActionCounts {
        tasks
            .iter()
            .fold(ActionCounts::default(), |mut counts, task| {
                match task.action {
                    TaskAction::Install => counts.install += 1,
                    TaskAction::Update => counts.update += 1,
                    TaskAction::Uninstall => counts.uninstall += 1,
                    TaskAction::Other(_) => {}
                }
                counts
            })
    }

    /// Status chart series; zero-count categories are left out
    pub fn status_series(counts: &StatusCounts) -> Vec<ChartEntry> {
        TaskStatus::KNOWN
            .iter()
            .map(|status| ChartEntry {
                label: status.label().to_string(),
                count: counts.get(status),
            })
            .filter(|entry| entry.count > 0)
            .collect()
    }

    /// Action chart series; zero-count categories are left out
    pub fn action_series(counts: &ActionCounts) -> Vec<ChartEntry> {
        TaskAction::KNOWN
            .iter()
            .map(|action| ChartEntry {
                label: action.label().to_string(),
                count: counts.get(action),
            })
            .filter(|entry| entry.count > 0)
            .collect()
    }

    /// Most frequent task identifiers, count descending, ties by identifier
    pub fn top_task_ids(tasks: &[DeploymentTask], limit: usize) -> Vec<TaskIdFrequency> {
        let mut frequencies: HashMap<&str, usize> = HashMap::new();
        for task in tasks {
            *frequencies.entry(task.task_id.as_str()).or_insert(0) += 1;
        }

        let mut ranked: Vec<TaskIdFrequency> = frequencies
            .into_iter()
            .map(|(task_id, count)| TaskIdFrequency {
                task_id: task_id.to_string(),
                count,
            })
            .collect();

        ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.task_id.cmp(&b.task_id)));
        ranked.truncate(limit);
        ranked
    }
}
