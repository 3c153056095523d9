/// Mock implementations for testing
mod mock_notifier;
mod mock_progress_reporter;
mod mock_software_catalog;
mod mock_task_repository;

pub use mock_notifier::MockNotifier;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_software_catalog::MockSoftwareCatalog;
pub use mock_task_repository::MockTaskRepository;
