use crate::deployment_tracking::domain::{DeploymentTask, SoftwareId};
use crate::ports::outbound::TaskRepository;
use crate::shared::error::TrackerError;
use crate::shared::Result;
use async_trait::async_trait;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HttpTaskRepository adapter for fetching deployment tasks from an HTTP API
///
/// Requests `GET {base_url}/software/{app_id}/tasks` and expects a JSON array
/// of tasks. A 404 is treated as an identifier with no deployments.
pub struct HttpTaskRepository {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTaskRepository {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(TrackerError::Validation {
                message: "API base URL cannot be empty".to_string(),
            }
            .into());
        }

        let user_agent = format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    /// Rejects identifiers that could escape the tasks path
    fn validate_url_component(component: &str) -> Result<()> {
        if component.contains('/') || component.contains('\\') {
            anyhow::bail!("Security: Software ID contains path separators which are not allowed");
        }

        if component.contains("..") {
            anyhow::bail!("Security: Software ID contains '..' which is not allowed");
        }

        Ok(())
    }

    fn tasks_url(&self, app_id: &SoftwareId) -> Result<String> {
        Self::validate_url_component(app_id.as_str())?;
        Ok(format!(
            "{}/software/{}/tasks",
            self.base_url,
            urlencoding::encode(app_id.as_str())
        ))
    }

    fn request_error(url: &str, details: impl ToString) -> anyhow::Error {
        TrackerError::ApiRequestError {
            url: url.to_string(),
            details: details.to_string(),
        }
        .into()
    }
}

#[async_trait]
impl TaskRepository for HttpTaskRepository {
    async fn find_tasks(&self, app_id: &SoftwareId) -> Result<Vec<DeploymentTask>> {
        let url = self.tasks_url(app_id)?;

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Self::request_error(&url, e))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }

        if !response.status().is_success() {
            return Err(Self::request_error(
                &url,
                format!("API returned status code {}", response.status()),
            ));
        }

        response
            .json::<Vec<DeploymentTask>>()
            .await
            .map_err(|e| Self::request_error(&url, format!("Invalid response body: {}", e)))
    }
}
