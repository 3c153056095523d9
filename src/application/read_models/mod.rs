//! Read models for rendering
//!
//! View-optimized structs derived purely from the filtered record set or
//! the filtered catalog. Formatters only ever see these.

pub mod catalog_view;
pub mod deployment_status_view;
pub mod view_builder;

pub use catalog_view::{CatalogRow, CatalogView, DEPLOYMENT_STATUS_ROUTE};
pub use deployment_status_view::{
    AppliedFilters, DeploymentStatusView, ReportMetadata, StatusTiles, TaskRow,
};
pub use view_builder::ViewBuilder;
