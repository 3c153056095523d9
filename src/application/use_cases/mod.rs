/// Use cases module containing application business logic orchestration
mod browse_catalog;
mod query_deployments;

pub use browse_catalog::{BrowseCatalogUseCase, NavigationTarget};
pub use query_deployments::{
    QueryDeploymentsUseCase, SearchOutcome, SearchResult, SearchState, DEFAULT_SEARCH_DELAY,
};
