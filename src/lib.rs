//! deploy-tracker - Deployment task tracking from the terminal
//!
//! This library looks up the deployment tasks recorded for a software ID,
//! filters them by status, action and hostname, and aggregates the result
//! into summary tiles, chart series and a task-ID ranking. It also lists and
//! filters the software catalog. It follows hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`deployment_tracking`): Domain models, filters and aggregation
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//! - **Config** (`config`): YAML configuration file support
//!
//! # Example
//!
//! ```no_run
//! use deploy_tracker::prelude::*;
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! // Create adapters
//! let repository = InMemoryStore::fixture()?;
//! let notifier = ConsoleNotifier::new(false);
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = QueryDeploymentsUseCase::new(
//!     repository,
//!     notifier,
//!     progress_reporter,
//!     Duration::from_millis(1000),
//! );
//!
//! // Execute
//! let query = DeploymentQuery::new("sw-001", FilterCriteria::cleared());
//! if let DeploymentStatusResponse::Rendered(view) = use_case.execute(query).await? {
//!     // Format output
//!     let output = MarkdownFormatter::new().format_status(&view)?;
//!     println!("{}", output);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod deployment_tracking;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{ConsoleNotifier, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, JsonDatasetReader, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        JsonFormatter, MarkdownFormatter, TextFormatter,
    };
    pub use crate::adapters::outbound::memory::InMemoryStore;
    pub use crate::adapters::outbound::network::HttpTaskRepository;
    pub use crate::application::dto::{
        CatalogQuery, DeploymentQuery, DeploymentStatusResponse, OutputFormat,
    };
    pub use crate::application::read_models::{CatalogView, DeploymentStatusView};
    pub use crate::application::use_cases::{
        BrowseCatalogUseCase, QueryDeploymentsUseCase, SearchOutcome, SearchState,
    };
    pub use crate::deployment_tracking::domain::{
        ActionFilter, CatalogStatusFilter, DeploymentTask, FilterCriteria, Software, SoftwareId,
        StatusFilter, TaskAction, TaskStatus,
    };
    pub use crate::deployment_tracking::services::{
        apply_filters, CatalogFilter, TaskAggregator, TaskFilter,
    };
    pub use crate::ports::outbound::{
        Notification, Notifier, OutputPresenter, ProgressReporter, ReportFormatter,
        SoftwareCatalog, TaskRepository,
    };
    pub use crate::shared::Result;
}
