use crate::application::dto::{DeploymentQuery, DeploymentStatusResponse};
use crate::application::read_models::ViewBuilder;
use crate::deployment_tracking::domain::{DeploymentTask, SoftwareId};
use crate::ports::outbound::{Notification, Notifier, ProgressReporter, TaskRepository};
use crate::shared::Result;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Simulated lookup latency used when nothing else is configured
pub const DEFAULT_SEARCH_DELAY: Duration = Duration::from_millis(1000);

/// Lifecycle of the search trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchState {
    Idle,
    /// A lookup is pending; the search control is disabled
    Searching { app_id: SoftwareId },
    Resolved { app_id: SoftwareId, count: usize },
}

/// Tasks resolved for one identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub app_id: SoftwareId,
    pub tasks: Vec<DeploymentTask>,
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Blank identifier; nothing was looked up
    Rejected,
    Resolved(SearchResult),
    /// A later search started before this one resolved; its result was dropped
    Superseded,
}

/// QueryDeploymentsUseCase - The deployment search trigger
///
/// Resolves an identifier through the [`TaskRepository`] after a simulated
/// delay and raises notices through the [`Notifier`]. Every search takes a
/// generation number; a search that finishes after a newer one has started
/// is reported as [`SearchOutcome::Superseded`] and leaves state untouched.
///
/// # Type Parameters
/// * `R` - TaskRepository implementation
/// * `N` - Notifier implementation
/// * `P` - ProgressReporter implementation
pub struct QueryDeploymentsUseCase<R, N, P> {
    repository: R,
    notifier: N,
    progress_reporter: P,
    delay: Duration,
    generation: AtomicU64,
    state: Mutex<SearchState>,
}

impl<R, N, P> QueryDeploymentsUseCase<R, N, P>
where
    R: TaskRepository,
    N: Notifier,
    P: ProgressReporter,
{
    pub fn new(repository: R, notifier: N, progress_reporter: P, delay: Duration) -> Self {
        Self {
            repository,
            notifier,
            progress_reporter,
            delay,
            generation: AtomicU64::new(0),
            state: Mutex::new(SearchState::Idle),
        }
    }

    pub fn state(&self) -> SearchState {
        self.lock_state().clone()
    }

    /// Whether the search control should currently be disabled
    pub fn is_searching(&self) -> bool {
        matches!(*self.lock_state(), SearchState::Searching { .. })
    }

    /// Runs one search
    ///
    /// # Errors
    /// Returns an error if the repository fails.
    pub async fn search(&self, raw_app_id: &str) -> Result<SearchOutcome> {
        if raw_app_id.trim().is_empty() {
            self.notifier.notify(&Notification::destructive(
                "Please enter a software ID",
                "Enter the software ID to query",
            ));
            return Ok(SearchOutcome::Rejected);
        }

        let app_id = SoftwareId::new(raw_app_id)?;
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        self.set_state(SearchState::Searching {
            app_id: app_id.clone(),
        });
        self.progress_reporter
            .start_activity(&format!("Querying deployments for \"{}\"...", app_id));

        tokio::time::sleep(self.delay).await;
        let lookup = self.repository.find_tasks(&app_id).await;

        if self.generation.load(Ordering::SeqCst) != generation {
            return Ok(SearchOutcome::Superseded);
        }

        self.progress_reporter.finish_activity();

        let tasks = match lookup {
            Ok(tasks) => tasks,
            Err(e) => {
                self.set_state(SearchState::Idle);
                return Err(e);
            }
        };

        self.set_state(SearchState::Resolved {
            app_id: app_id.clone(),
            count: tasks.len(),
        });

        if tasks.is_empty() {
            self.notifier.notify(&Notification::destructive(
                "No data found",
                format!("Software ID \"{}\" has no deployment records", app_id),
            ));
        } else {
            self.notifier.notify(&Notification::normal(
                "Query succeeded",
                format!("Found {} deployment record(s)", tasks.len()),
            ));
        }

        Ok(SearchOutcome::Resolved(SearchResult { app_id, tasks }))
    }

    /// Runs a search and builds the deployment status view from its result
    pub async fn execute(&self, query: DeploymentQuery) -> Result<DeploymentStatusResponse> {
        let result = match self.search(&query.app_id).await? {
            SearchOutcome::Rejected => return Ok(DeploymentStatusResponse::Rejected),
            SearchOutcome::Superseded => return Ok(DeploymentStatusResponse::Superseded),
            SearchOutcome::Resolved(result) => result,
        };

        let view = ViewBuilder::build_status(
            &result.app_id,
            &result.tasks,
            &query.criteria,
            query.top_limit,
            ViewBuilder::metadata(chrono::Utc::now()),
        );

        if !query.criteria.is_cleared() {
            self.progress_reporter.report(&format!(
                "🔎 Showing {} / {} record(s) after filtering",
                view.filtered_count(),
                view.total_count
            ));
        }

        Ok(DeploymentStatusResponse::Rendered(Box::new(view)))
    }

    fn set_state(&self, state: SearchState) {
        *self.lock_state() = state;
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, SearchState> {
        // Every write replaces the whole value, so a poisoned lock is still consistent
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
