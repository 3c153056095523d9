mod cli;

use cli::{Args, CatalogArgs, Command, CommonArgs, StatusArgs};
use deploy_tracker::adapters::outbound::console::{ConsoleNotifier, StderrProgressReporter};
use deploy_tracker::adapters::outbound::filesystem::JsonDatasetReader;
use deploy_tracker::adapters::outbound::memory::InMemoryStore;
use deploy_tracker::adapters::outbound::network::HttpTaskRepository;
use deploy_tracker::application::dto::{
    CatalogQuery, DeploymentQuery, DeploymentStatusResponse, OutputFormat,
};
use deploy_tracker::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use deploy_tracker::application::use_cases::{
    BrowseCatalogUseCase, QueryDeploymentsUseCase, DEFAULT_SEARCH_DELAY,
};
use deploy_tracker::config::{self, ConfigFile};
use deploy_tracker::deployment_tracking::domain::FilterCriteria;
use deploy_tracker::deployment_tracking::services::DEFAULT_TOP_LIMIT;
use deploy_tracker::ports::outbound::{ProgressReporter, TaskRepository};
use deploy_tracker::shared::error::{ExitCode, TrackerError};
use deploy_tracker::shared::Result;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

fn main() {
    let args = Args::parse_args();

    match run(args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(exit_code_for(&e).as_i32());
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(&args.common)?;
    let top = match &args.command {
        Command::Status(status) => status.top,
        Command::Catalog(_) => None,
    };
    let settings = Settings::resolve(
        &args.common,
        config,
        top,
        std::io::stdout().is_terminal(),
        std::io::stderr().is_terminal(),
    )?;

    let progress_reporter = StderrProgressReporter::new();
    match args.command {
        Command::Status(status) => run_status(&settings, &progress_reporter, status),
        Command::Catalog(catalog) => run_catalog(&settings, &progress_reporter, catalog),
    }
}

/// Where deployment tasks and catalog entries come from
#[derive(Debug, Clone, PartialEq, Eq)]
enum DataSource {
    Fixture,
    Dataset(PathBuf),
    Api(String),
}

/// Effective options after merging the config file with command-line flags
#[derive(Debug)]
struct Settings {
    format: OutputFormat,
    delay: Duration,
    source: DataSource,
    top: usize,
    output: Option<PathBuf>,
    /// ANSI colors in the rendered view
    color: bool,
    /// ANSI colors in notices on stderr
    notice_color: bool,
}

impl Settings {
    /// Command-line flags win over config values, which win over defaults
    fn resolve(
        common: &CommonArgs,
        config: Option<ConfigFile>,
        top: Option<u64>,
        stdout_is_terminal: bool,
        stderr_is_terminal: bool,
    ) -> Result<Self> {
        let config = config.unwrap_or_default();

        let format = match (common.format, config.format.as_deref()) {
            (Some(format), _) => format,
            (None, Some(raw)) => raw.parse::<OutputFormat>().map_err(anyhow::Error::msg)?,
            (None, None) => OutputFormat::default(),
        };

        let delay = common
            .delay_ms
            .or(config.delay_ms)
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_SEARCH_DELAY);

        let source = if let Some(url) = &common.api_url {
            DataSource::Api(url.clone())
        } else if let Some(path) = &common.data {
            DataSource::Dataset(path.clone())
        } else if let Some(url) = config.api_url {
            DataSource::Api(url)
        } else if let Some(path) = config.data_file {
            DataSource::Dataset(path)
        } else {
            DataSource::Fixture
        };

        let top = top
            .map(|n| usize::try_from(n).unwrap_or(usize::MAX))
            .or(config.top)
            .unwrap_or(DEFAULT_TOP_LIMIT);

        let output = common.output.clone();
        let color = format == OutputFormat::Text
            && output.is_none()
            && !common.no_color
            && stdout_is_terminal;

        Ok(Self {
            format,
            delay,
            source,
            top,
            output,
            color,
            notice_color: !common.no_color && stderr_is_terminal,
        })
    }

    fn presenter_type(&self) -> PresenterType {
        match &self.output {
            Some(path) => PresenterType::File(path.clone()),
            None => PresenterType::Stdout,
        }
    }
}

fn load_config(common: &CommonArgs) -> Result<Option<ConfigFile>> {
    if let Some(path) = &common.config {
        return Ok(Some(config::load_config_from_path(path)?));
    }

    let config = config::discover_config(&std::env::current_dir()?)?;
    if config.is_some() {
        eprintln!("📄 Auto-discovered config file: {}", config::CONFIG_FILENAME);
    }
    Ok(config)
}

fn task_repository(source: &DataSource) -> Result<Box<dyn TaskRepository>> {
    Ok(match source {
        DataSource::Fixture => Box::new(InMemoryStore::fixture()?),
        DataSource::Dataset(path) => Box::new(JsonDatasetReader::new(path).load()?),
        DataSource::Api(url) => Box::new(HttpTaskRepository::new(url)?),
    })
}

/// The deployment API only serves tasks, so it shares the built-in catalog
fn catalog_store(source: &DataSource) -> Result<InMemoryStore> {
    match source {
        DataSource::Dataset(path) => JsonDatasetReader::new(path).load(),
        DataSource::Fixture | DataSource::Api(_) => InMemoryStore::fixture(),
    }
}

fn run_status(
    settings: &Settings,
    progress_reporter: &StderrProgressReporter,
    args: StatusArgs,
) -> Result<ExitCode> {
    let criteria = FilterCriteria::new(args.status, args.action, args.host);
    let query = DeploymentQuery::new(args.app_id, criteria).with_top_limit(settings.top);
    run_status_query(settings, progress_reporter, query)
}

fn run_status_query(
    settings: &Settings,
    progress_reporter: &StderrProgressReporter,
    query: DeploymentQuery,
) -> Result<ExitCode> {
    let use_case = QueryDeploymentsUseCase::new(
        task_repository(&settings.source)?,
        ConsoleNotifier::new(settings.notice_color),
        progress_reporter,
        settings.delay,
    );

    let runtime = tokio::runtime::Runtime::new()?;
    let view = match runtime.block_on(use_case.execute(query))? {
        DeploymentStatusResponse::Rejected => return Ok(ExitCode::ValidationFailed),
        DeploymentStatusResponse::Superseded => return Ok(ExitCode::Success),
        DeploymentStatusResponse::Rendered(view) => view,
    };

    progress_reporter.report(FormatterFactory::progress_message(settings.format));
    let formatter = FormatterFactory::create(settings.format, settings.color);
    let content = formatter.format_status(&view)?;

    PresenterFactory::create(settings.presenter_type()).present(&content)?;
    Ok(ExitCode::Success)
}

fn run_catalog(
    settings: &Settings,
    progress_reporter: &StderrProgressReporter,
    args: CatalogArgs,
) -> Result<ExitCode> {
    let use_case = BrowseCatalogUseCase::new(catalog_store(&settings.source)?, progress_reporter);

    if let Some(app_id) = args.open.as_deref() {
        let target = use_case.open(app_id)?;
        let query = DeploymentQuery::new(target.app_id.as_str(), FilterCriteria::cleared())
            .with_top_limit(settings.top);
        return run_status_query(settings, progress_reporter, query);
    }

    let view = use_case.execute(&CatalogQuery::new(args.search, args.status))?;

    progress_reporter.report(FormatterFactory::progress_message(settings.format));
    let formatter = FormatterFactory::create(settings.format, settings.color);
    let content = formatter.format_catalog(&view)?;

    PresenterFactory::create(settings.presenter_type()).present(&content)?;
    Ok(ExitCode::Success)
}

/// Identifier problems are validation failures; everything else is an application error
fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<TrackerError>() {
        Some(TrackerError::Validation { .. }) => ExitCode::ValidationFailed,
        _ => ExitCode::ApplicationError,
    }
}
