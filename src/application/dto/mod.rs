/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod catalog_query;
mod deployment_query;
mod output_format;

pub use catalog_query::CatalogQuery;
pub use deployment_query::{DeploymentQuery, DeploymentStatusResponse};
pub use output_format::OutputFormat;
