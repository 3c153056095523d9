use crate::application::read_models::DeploymentStatusView;
use crate::deployment_tracking::domain::FilterCriteria;
use crate::deployment_tracking::services::DEFAULT_TOP_LIMIT;

/// DeploymentQuery - Request DTO for the deployment status view
#[derive(Debug, Clone)]
pub struct DeploymentQuery {
    /// Raw identifier as typed by the user or supplied by a deep link
    pub app_id: String,
    pub criteria: FilterCriteria,
    /// How many task identifiers the frequency ranking keeps
    pub top_limit: usize,
}

impl DeploymentQuery {
    pub fn new(app_id: impl Into<String>, criteria: FilterCriteria) -> Self {
        Self {
            app_id: app_id.into(),
            criteria,
            top_limit: DEFAULT_TOP_LIMIT,
        }
    }

    pub fn with_top_limit(mut self, top_limit: usize) -> Self {
        self.top_limit = top_limit;
        self
    }
}

/// DeploymentStatusResponse - Result of running a deployment query
#[derive(Debug, Clone)]
pub enum DeploymentStatusResponse {
    /// The identifier was blank; no lookup happened
    Rejected,
    /// The lookup finished and the view was built (possibly with zero tasks)
    Rendered(Box<DeploymentStatusView>),
    /// A newer search started while this one was pending
    Superseded,
}
