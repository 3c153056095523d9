use async_trait::async_trait;
use deploy_tracker::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock TaskRepository for testing
#[derive(Default)]
pub struct MockTaskRepository {
    pub tasks: HashMap<String, Vec<DeploymentTask>>,
    pub should_fail: bool,
    pub calls: Arc<AtomicUsize>,
}

impl MockTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tasks(mut self, app_id: &str, tasks: Vec<DeploymentTask>) -> Self {
        self.tasks.insert(app_id.to_string(), tasks);
        self
    }

    #[allow(dead_code)]
    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    #[allow(dead_code)]
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TaskRepository for MockTaskRepository {
    async fn find_tasks(&self, app_id: &SoftwareId) -> Result<Vec<DeploymentTask>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.should_fail {
            anyhow::bail!("Mock task repository failure");
        }
        Ok(self.tasks.get(app_id.as_str()).cloned().unwrap_or_default())
    }
}
