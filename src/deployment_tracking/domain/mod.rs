pub mod deployment_task;
pub mod filter_criteria;
pub mod software;

pub use deployment_task::{DeploymentTask, TaskAction, TaskStatus};
pub use filter_criteria::{ActionFilter, CatalogStatusFilter, FilterCriteria, StatusFilter};
pub use software::{ListingStatus, Software, SoftwareId};
