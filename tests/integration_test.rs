/// Integration tests for the application layer
mod test_utilities;

use deploy_tracker::ports::outbound::Severity;
use deploy_tracker::prelude::*;
use std::time::Duration;
use test_utilities::mocks::*;

fn task(task_id: &str, hostname: &str, action: TaskAction, status: TaskStatus) -> DeploymentTask {
    DeploymentTask::new(
        task_id,
        hostname,
        "user_12345",
        action,
        status,
        "2025-06-05 10:00:00",
    )
}

fn fixture_use_case() -> (
    QueryDeploymentsUseCase<InMemoryStore, MockNotifier, MockProgressReporter>,
    MockNotifier,
) {
    let notifier = MockNotifier::new();
    let use_case = QueryDeploymentsUseCase::new(
        InMemoryStore::fixture().unwrap(),
        notifier.clone(),
        MockProgressReporter::new(),
        Duration::ZERO,
    );
    (use_case, notifier)
}

fn rendered(response: DeploymentStatusResponse) -> Box<DeploymentStatusView> {
    match response {
        DeploymentStatusResponse::Rendered(view) => view,
        other => panic!("expected rendered view, got {:?}", other),
    }
}

#[tokio::test]
async fn test_search_sw001_returns_canonical_fixture() {
    let (use_case, notifier) = fixture_use_case();

    let SearchOutcome::Resolved(result) = use_case.search("sw-001").await.unwrap() else {
        panic!("expected resolved outcome");
    };

    assert_eq!(result.tasks.len(), 5);
    let first = result
        .tasks
        .iter()
        .find(|t| t.task_id == "T001-20250604143126-001")
        .unwrap();
    assert_eq!(first.status, TaskStatus::Succeed);

    let notices = notifier.get_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].title, "Query succeeded");
    assert_eq!(notices[0].description, "Found 5 deployment record(s)");
    assert_eq!(
        use_case.state(),
        SearchState::Resolved {
            app_id: SoftwareId::new("sw-001").unwrap(),
            count: 5,
        }
    );
}

#[tokio::test]
async fn test_search_unknown_id_notifies_not_found() {
    let (use_case, notifier) = fixture_use_case();

    let SearchOutcome::Resolved(result) = use_case.search("sw-999").await.unwrap() else {
        panic!("expected resolved outcome");
    };
    assert!(result.is_empty());

    let notices = notifier.get_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].title, "No data found");
    assert_eq!(notices[0].severity, Severity::Destructive);
    assert!(notices[0].description.contains("sw-999"));
}

#[tokio::test]
async fn test_blank_search_never_reaches_repository() {
    let repository = MockTaskRepository::new();
    let calls = repository.calls.clone();
    let notifier = MockNotifier::new();
    let use_case = QueryDeploymentsUseCase::new(
        repository,
        notifier.clone(),
        MockProgressReporter::new(),
        Duration::ZERO,
    );

    assert_eq!(use_case.search("").await.unwrap(), SearchOutcome::Rejected);
    assert_eq!(use_case.search("   ").await.unwrap(), SearchOutcome::Rejected);

    assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 0);
    assert_eq!(notifier.destructive_count(), 2);
    assert_eq!(notifier.last_title().as_deref(), Some("Please enter a software ID"));
}

#[tokio::test]
async fn test_search_reports_activity_around_lookup() {
    let reporter = MockProgressReporter::new();
    let use_case = QueryDeploymentsUseCase::new(
        MockTaskRepository::new().with_tasks(
            "app-1",
            vec![task("A1", "web-1", TaskAction::Install, TaskStatus::Running)],
        ),
        MockNotifier::new(),
        reporter.clone(),
        Duration::ZERO,
    );

    use_case.search("app-1").await.unwrap();

    let messages = reporter.get_messages();
    assert!(messages[0].starts_with("Started: Querying deployments for \"app-1\""));
    assert_eq!(messages[1], "Finished");
}

#[tokio::test]
async fn test_repository_failure_propagates_and_resets_state() {
    let notifier = MockNotifier::new();
    let use_case = QueryDeploymentsUseCase::new(
        MockTaskRepository::with_failure(),
        notifier.clone(),
        MockProgressReporter::new(),
        Duration::ZERO,
    );

    let err = use_case.search("sw-001").await.unwrap_err();
    assert!(err.to_string().contains("Mock task repository failure"));
    assert_eq!(use_case.state(), SearchState::Idle);
    assert!(notifier.get_notices().is_empty());
}

#[tokio::test]
async fn test_hostname_filter_server_0_matches_all_sw001_tasks() {
    let (use_case, _) = fixture_use_case();
    let criteria = FilterCriteria::new(StatusFilter::All, ActionFilter::All, "server-0");

    let view = rendered(
        use_case
            .execute(DeploymentQuery::new("sw-001", criteria))
            .await
            .unwrap(),
    );

    assert_eq!(view.total_count, 5);
    assert_eq!(view.filtered_count(), 5);
}

#[tokio::test]
async fn test_hostname_filter_nonexistent_keeps_total() {
    let (use_case, _) = fixture_use_case();
    let criteria = FilterCriteria::new(StatusFilter::All, ActionFilter::All, "nonexistent");

    let view = rendered(
        use_case
            .execute(DeploymentQuery::new("sw-001", criteria))
            .await
            .unwrap(),
    );

    assert_eq!(view.total_count, 5);
    assert_eq!(view.filtered_count(), 0);
    assert!(view.tasks.is_empty());
    assert!(view.status_chart.is_empty());
    assert_eq!(view.tiles.succeed, 0);
}

#[tokio::test]
async fn test_combined_filters_and_aggregation() {
    let (use_case, _) = fixture_use_case();
    let criteria = FilterCriteria::new(
        StatusFilter::Only(TaskStatus::Succeed),
        ActionFilter::Only(TaskAction::Install),
        "SERVER",
    );

    let view = rendered(
        use_case
            .execute(DeploymentQuery::new("sw-001", criteria))
            .await
            .unwrap(),
    );

    let ids: Vec<&str> = view.tasks.iter().map(|t| t.task_id.as_str()).collect();
    assert_eq!(ids, vec!["T001-20250604143126-001", "T004-20250604143126-001"]);
    assert_eq!(view.status_chart.len(), 1);
    assert_eq!(view.status_chart[0].label, "Succeeded");
    assert_eq!(view.action_chart[0].count, 2);
    assert_eq!(view.tiles.running, 0);
}

#[tokio::test]
async fn test_top_task_ids_respects_limit_and_tie_break() {
    let tasks = vec![
        task("T-b", "h1", TaskAction::Install, TaskStatus::Succeed),
        task("T-a", "h2", TaskAction::Install, TaskStatus::Succeed),
        task("T-c", "h3", TaskAction::Update, TaskStatus::Failed),
        task("T-c", "h4", TaskAction::Update, TaskStatus::Failed),
    ];
    let use_case = QueryDeploymentsUseCase::new(
        MockTaskRepository::new().with_tasks("app-1", tasks),
        MockNotifier::new(),
        MockProgressReporter::new(),
        Duration::ZERO,
    );

    let view = rendered(
        use_case
            .execute(DeploymentQuery::new("app-1", FilterCriteria::cleared()).with_top_limit(2))
            .await
            .unwrap(),
    );

    let ranking: Vec<(&str, usize)> = view
        .top_task_ids
        .iter()
        .map(|t| (t.task_id.as_str(), t.count))
        .collect();
    assert_eq!(ranking, vec![("T-c", 2), ("T-a", 1)]);
}

#[tokio::test]
async fn test_unknown_statuses_are_invisible_to_counts() {
    let tasks = vec![
        task("A1", "h1", TaskAction::Install, TaskStatus::Succeed),
        task(
            "A2",
            "h2",
            TaskAction::Other("rollback".to_string()),
            TaskStatus::Unknown("PENDING".to_string()),
        ),
    ];

    let status = TaskAggregator::status_counts(&tasks);
    assert_eq!(status.known_total(), 1);
    assert!(status.known_total() < tasks.len());

    let filtered = apply_filters(&tasks, &StatusFilter::All, &ActionFilter::All, "");
    assert_eq!(filtered, tasks);
}

#[test]
fn test_catalog_search_scanner_matches_security_scanner() {
    let use_case = BrowseCatalogUseCase::new(
        InMemoryStore::fixture().unwrap(),
        MockProgressReporter::new(),
    );

    let view = use_case
        .execute(&CatalogQuery::new("scanner", CatalogStatusFilter::All))
        .unwrap();

    assert_eq!(view.entries.len(), 1);
    assert_eq!(view.entries[0].name, "SecurityScanner");
    assert_eq!(view.summary.total, 5);
}

#[test]
fn test_catalog_empty_result_reports_warning() {
    let reporter = MockProgressReporter::new();
    let use_case = BrowseCatalogUseCase::new(
        MockSoftwareCatalog::new(vec![Software::new(
            "app-1",
            "0.1.0",
            "Billing",
            "ops",
            deploy_tracker::deployment_tracking::domain::ListingStatus::Listed,
        )
        .unwrap()]),
        reporter.clone(),
    );

    let view = use_case
        .execute(&CatalogQuery::new("", CatalogStatusFilter::Unlisted))
        .unwrap();

    assert!(view.is_empty());
    assert!(reporter
        .get_messages()
        .iter()
        .any(|m| m.starts_with("Error:") && m.contains("No software matches")));
}

#[test]
fn test_catalog_failure_propagates() {
    let use_case =
        BrowseCatalogUseCase::new(MockSoftwareCatalog::with_failure(), MockProgressReporter::new());
    assert!(use_case.execute(&CatalogQuery::default()).is_err());
}

#[test]
fn test_catalog_open_builds_encoded_link() {
    let use_case = BrowseCatalogUseCase::new(
        InMemoryStore::fixture().unwrap(),
        MockProgressReporter::new(),
    );

    let target = use_case.open("sw-002").unwrap();
    assert_eq!(target.link, "/deployment-status?appId=sw-002");
}
