use crate::deployment_tracking::domain::{
    DeploymentTask, ListingStatus, Software, SoftwareId, TaskAction, TaskStatus,
};
use crate::ports::outbound::{SoftwareCatalog, TaskRepository};
use crate::shared::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// InMemoryStore adapter serving catalog entries and deployment tasks
///
/// Implements both [`TaskRepository`] and [`SoftwareCatalog`]. Used for the
/// built-in fixture and for datasets loaded from a JSON file.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    software: Vec<Software>,
    deployments: HashMap<String, Vec<DeploymentTask>>,
}

impl InMemoryStore {
    pub fn new(software: Vec<Software>, deployments: HashMap<String, Vec<DeploymentTask>>) -> Self {
        Self {
            software,
            deployments,
        }
    }

    /// The dataset compiled into the binary
    pub fn fixture() -> Result<Self> {
        let software = vec![
            Software::new("sw-001", "1.0.0", "AwesomeApp", "user_12345", ListingStatus::Listed)?,
            Software::new("sw-002", "1.0.2", "GreatTool", "user_67890", ListingStatus::Listed)?,
            Software::new(
                "sw-003",
                "2.1.0",
                "DataAnalyzer",
                "user_11111",
                ListingStatus::Unlisted,
            )?,
            Software::new(
                "sw-004",
                "1.5.3",
                "SecurityScanner",
                "user_22222",
                ListingStatus::Listed,
            )?,
            Software::new(
                "sw-005",
                "3.0.1",
                "ReportGenerator",
                "user_33333",
                ListingStatus::Listed,
            )?,
        ];

        let mut deployments = HashMap::new();
        deployments.insert(
            "sw-001".to_string(),
            vec![
                DeploymentTask::new(
                    "T001-20250604143126-001",
                    "server-01.company.com",
                    "user_12345",
                    TaskAction::Install,
                    TaskStatus::Succeed,
                    "2025-06-05 10:05:26",
                ),
                DeploymentTask::new(
                    "T002-20250604143126-001",
                    "server-02.company.com",
                    "user_12345",
                    TaskAction::Install,
                    TaskStatus::Running,
                    "2025-06-05 11:20:15",
                ),
                DeploymentTask::new(
                    "T003-20250604143126-001",
                    "server-03.company.com",
                    "user_12345",
                    TaskAction::Update,
                    TaskStatus::Failed,
                    "2025-06-05 09:15:42",
                ),
                DeploymentTask::new(
                    "T004-20250604143126-001",
                    "server-04.company.com",
                    "user_12345",
                    TaskAction::Install,
                    TaskStatus::Succeed,
                    "2025-06-05 08:30:15",
                ),
                DeploymentTask::new(
                    "T005-20250604143126-001",
                    "server-05.company.com",
                    "user_67890",
                    TaskAction::Update,
                    TaskStatus::Succeed,
                    "2025-06-05 12:45:30",
                ),
            ],
        );
        deployments.insert(
            "sw-002".to_string(),
            vec![DeploymentTask::new(
                "T004-20250604143126-002",
                "server-04.company.com",
                "user_67890",
                TaskAction::Install,
                TaskStatus::Succeed,
                "2025-06-05 14:30:18",
            )],
        );

        Ok(Self::new(software, deployments))
    }

    pub fn tasks_for(&self, app_id: &SoftwareId) -> Vec<DeploymentTask> {
        self.deployments
            .get(app_id.as_str())
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl TaskRepository for InMemoryStore {
    async fn find_tasks(&self, app_id: &SoftwareId) -> Result<Vec<DeploymentTask>> {
        Ok(self.tasks_for(app_id))
    }
}

impl SoftwareCatalog for InMemoryStore {
    fn list_software(&self) -> Result<Vec<Software>> {
        Ok(self.software.clone())
    }
}
