/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (data sources, console, file system, etc.).
pub mod notifier;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;
pub mod software_catalog;
pub mod task_repository;

pub use notifier::{Notification, Notifier, Severity};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
pub use software_catalog::SoftwareCatalog;
pub use task_repository::TaskRepository;
