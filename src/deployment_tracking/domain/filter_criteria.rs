use super::deployment_task::{TaskAction, TaskStatus};
use super::software::ListingStatus;
use std::str::FromStr;

/// Status selector: `all` or one known status (case-sensitive)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(TaskStatus),
}

impl StatusFilter {
    pub fn accepts(&self, status: &TaskStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(expected) => expected == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(StatusFilter::All),
            "SUCCEED" => Ok(StatusFilter::Only(TaskStatus::Succeed)),
            "RUNNING" => Ok(StatusFilter::Only(TaskStatus::Running)),
            "FAILED" => Ok(StatusFilter::Only(TaskStatus::Failed)),
            _ => Err(format!(
                "Invalid status filter: {}. Please specify 'all', 'SUCCEED', 'RUNNING' or 'FAILED'",
                s
            )),
        }
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusFilter::All => write!(f, "all"),
            StatusFilter::Only(status) => write!(f, "{}", status),
        }
    }
}

/// Action selector: `all` or one known action (case-sensitive)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActionFilter {
    #[default]
    All,
    Only(TaskAction),
}

impl ActionFilter {
    pub fn accepts(&self, action: &TaskAction) -> bool {
        match self {
            ActionFilter::All => true,
            ActionFilter::Only(expected) => expected == action,
        }
    }
}

impl FromStr for ActionFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(ActionFilter::All),
            "install" => Ok(ActionFilter::Only(TaskAction::Install)),
            "update" => Ok(ActionFilter::Only(TaskAction::Update)),
            "uninstall" => Ok(ActionFilter::Only(TaskAction::Uninstall)),
            _ => Err(format!(
                "Invalid action filter: {}. Please specify 'all', 'install', 'update' or 'uninstall'",
                s
            )),
        }
    }
}

impl std::fmt::Display for ActionFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionFilter::All => write!(f, "all"),
            ActionFilter::Only(action) => write!(f, "{}", action),
        }
    }
}

/// The three independent deployment filters, combined with logical AND
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub status: StatusFilter,
    pub action: ActionFilter,
    /// Case-insensitive hostname substring; blank means no constraint
    pub hostname: String,
}

impl FilterCriteria {
    pub fn new(status: StatusFilter, action: ActionFilter, hostname: impl Into<String>) -> Self {
        Self {
            status,
            action,
            hostname: hostname.into(),
        }
    }

    /// Criteria that let every record through
    pub fn cleared() -> Self {
        Self::default()
    }

    pub fn is_cleared(&self) -> bool {
        self.status == StatusFilter::All
            && self.action == ActionFilter::All
            && self.hostname.trim().is_empty()
    }
}

/// Listing status selector for the catalog view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogStatusFilter {
    #[default]
    All,
    Listed,
    Unlisted,
}

impl CatalogStatusFilter {
    pub fn accepts(&self, status: ListingStatus) -> bool {
        match self {
            CatalogStatusFilter::All => true,
            CatalogStatusFilter::Listed => status == ListingStatus::Listed,
            CatalogStatusFilter::Unlisted => status == ListingStatus::Unlisted,
        }
    }
}

impl FromStr for CatalogStatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(CatalogStatusFilter::All),
            "listed" | "Y" => Ok(CatalogStatusFilter::Listed),
            "unlisted" | "N" => Ok(CatalogStatusFilter::Unlisted),
            _ => Err(format!(
                "Invalid listing status: {}. Please specify 'all', 'listed' or 'unlisted'",
                s
            )),
        }
    }
}

impl std::fmt::Display for CatalogStatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogStatusFilter::All => write!(f, "all"),
            CatalogStatusFilter::Listed => write!(f, "listed"),
            CatalogStatusFilter::Unlisted => write!(f, "unlisted"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_filter_from_str() {
        assert_eq!(StatusFilter::from_str("all").unwrap(), StatusFilter::All);
        assert_eq!(
            StatusFilter::from_str("FAILED").unwrap(),
            StatusFilter::Only(TaskStatus::Failed)
        );
    }

    #[test]
    fn test_status_filter_is_case_sensitive() {
        let err = StatusFilter::from_str("failed").unwrap_err();
        assert!(err.contains("Invalid status filter"));
        assert!(StatusFilter::from_str("ALL").is_err());
    }

    #[test]
    fn test_status_filter_never_accepts_unknown_for_known_selector() {
        let filter = StatusFilter::Only(TaskStatus::Running);
        assert!(filter.accepts(&TaskStatus::Running));
        assert!(!filter.accepts(&TaskStatus::Unknown("RUNNING ".to_string())));
    }

    #[test]
    fn test_action_filter_from_str() {
        assert_eq!(
            ActionFilter::from_str("uninstall").unwrap(),
            ActionFilter::Only(TaskAction::Uninstall)
        );
        assert!(ActionFilter::from_str("Install").is_err());
    }

    #[test]
    fn test_filter_display_round_trips_to_cli_values() {
        assert_eq!(StatusFilter::Only(TaskStatus::Succeed).to_string(), "SUCCEED");
        assert_eq!(ActionFilter::Only(TaskAction::Update).to_string(), "update");
        assert_eq!(CatalogStatusFilter::Unlisted.to_string(), "unlisted");
    }

    #[test]
    fn test_cleared_criteria() {
        assert!(FilterCriteria::cleared().is_cleared());
        assert!(FilterCriteria::new(StatusFilter::All, ActionFilter::All, "   ").is_cleared());
        assert!(!FilterCriteria::new(StatusFilter::All, ActionFilter::All, "srv").is_cleared());
    }

    #[test]
    fn test_catalog_status_filter_accepts_dataset_letters() {
        assert_eq!(
            CatalogStatusFilter::from_str("Y").unwrap(),
            CatalogStatusFilter::Listed
        );
        assert_eq!(
            CatalogStatusFilter::from_str("unlisted").unwrap(),
            CatalogStatusFilter::Unlisted
        );
        assert!(CatalogStatusFilter::Listed.accepts(ListingStatus::Listed));
        assert!(!CatalogStatusFilter::Listed.accepts(ListingStatus::Unlisted));
        assert!(CatalogStatusFilter::All.accepts(ListingStatus::Unlisted));
    }
}
