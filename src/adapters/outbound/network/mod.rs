/// Network adapters for external API calls
mod http_task_repository;

pub use http_task_repository::HttpTaskRepository;
