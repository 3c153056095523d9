mod catalog_filter;
mod task_aggregator;
mod task_filter;

pub use catalog_filter::{CatalogFilter, CatalogSummary};
pub use task_aggregator::{
    ActionCounts, ChartEntry, StatusCounts, TaskAggregator, TaskIdFrequency, DEFAULT_TOP_LIMIT,
};
pub use task_filter::{apply_filters, TaskFilter};
