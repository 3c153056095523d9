use serde::{Deserialize, Serialize};

/// Outcome of a deployment task
///
/// The three known wire values are `SUCCEED`, `RUNNING` and `FAILED`.
/// Anything else is kept verbatim in `Unknown` and rendered as "Unknown".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    Succeed,
    Running,
    Failed,
    Unknown(String),
}

impl TaskStatus {
    /// Known statuses in display order
    pub const KNOWN: [TaskStatus; 3] = [
        TaskStatus::Succeed,
        TaskStatus::Running,
        TaskStatus::Failed,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            TaskStatus::Succeed => "SUCCEED",
            TaskStatus::Running => "RUNNING",
            TaskStatus::Failed => "FAILED",
            TaskStatus::Unknown(raw) => raw,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Succeed => "Succeeded",
            TaskStatus::Running => "Running",
            TaskStatus::Failed => "Failed",
            TaskStatus::Unknown(_) => "Unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, TaskStatus::Unknown(_))
    }
}

impl From<String> for TaskStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "SUCCEED" => TaskStatus::Succeed,
            "RUNNING" => TaskStatus::Running,
            "FAILED" => TaskStatus::Failed,
            _ => TaskStatus::Unknown(value),
        }
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Deployment operation kind
///
/// Unrecognized actions are kept in `Other` and displayed verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskAction {
    Install,
    Update,
    Uninstall,
    Other(String),
}

impl TaskAction {
    /// Known actions in display order
    pub const KNOWN: [TaskAction; 3] = [
        TaskAction::Install,
        TaskAction::Update,
        TaskAction::Uninstall,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            TaskAction::Install => "install",
            TaskAction::Update => "update",
            TaskAction::Uninstall => "uninstall",
            TaskAction::Other(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            TaskAction::Install => "Install",
            TaskAction::Update => "Update",
            TaskAction::Uninstall => "Uninstall",
            TaskAction::Other(raw) => raw,
        }
    }
}

impl From<String> for TaskAction {
    fn from(value: String) -> Self {
        match value.as_str() {
            "install" => TaskAction::Install,
            "update" => TaskAction::Update,
            "uninstall" => TaskAction::Uninstall,
            _ => TaskAction::Other(value),
        }
    }
}

impl From<TaskAction> for String {
    fn from(action: TaskAction) -> Self {
        action.as_str().to_string()
    }
}

impl std::fmt::Display for TaskAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single deployment action targeting one host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentTask {
    pub task_id: String,
    pub hostname: String,
    pub owner: String,
    pub action: TaskAction,
    #[serde(rename = "taskStatus")]
    pub status: TaskStatus,
    /// Last update, `YYYY-MM-DD HH:MM:SS`
    pub update_date: String,
}

impl DeploymentTask {
    pub fn new(
        task_id: &str,
        hostname: &str,
        owner: &str,
        action: TaskAction,
        status: TaskStatus,
        update_date: &str,
    ) -> Self {
        Self {
            task_id: task_id.to_string(),
            hostname: hostname.to_string(),
            owner: owner.to_string(),
            action,
            status,
            update_date: update_date.to_string(),
        }
    }
}
