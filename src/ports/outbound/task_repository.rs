use crate::deployment_tracking::domain::{DeploymentTask, SoftwareId};
use crate::shared::Result;
use async_trait::async_trait;

/// TaskRepository port for resolving a software identifier to its tasks
///
/// An unknown identifier is not an error: implementations return an
/// empty list.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Returns the deployment tasks recorded for `app_id`
    ///
    /// # Errors
    /// Returns an error only when the underlying data source fails
    /// (unreadable dataset, network failure, malformed response).
    async fn find_tasks(&self, app_id: &SoftwareId) -> Result<Vec<DeploymentTask>>;
}

#[async_trait]
impl<T: TaskRepository + ?Sized> TaskRepository for Box<T> {
    async fn find_tasks(&self, app_id: &SoftwareId) -> Result<Vec<DeploymentTask>> {
        (**self).find_tasks(app_id).await
    }
}
