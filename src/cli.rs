use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use deploy_tracker::application::dto::OutputFormat;
use deploy_tracker::config::MAX_DELAY_MS;
use deploy_tracker::deployment_tracking::domain::{
    ActionFilter, CatalogStatusFilter, StatusFilter,
};

/// Track software deployment tasks from the terminal
#[derive(Parser, Debug)]
#[command(name = "deploy-tracker")]
#[command(version)]
#[command(about = "Query, filter and chart software deployment status", long_about = None)]
pub struct Args {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every subcommand
#[derive(ClapArgs, Debug, Default)]
pub struct CommonArgs {
    /// Output format: text, markdown or json [default: text]
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// JSON dataset to read instead of the built-in one
    #[arg(long, global = true, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Base URL of a deployment API serving `/software/{id}/tasks`
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Simulated lookup latency in milliseconds [default: 1000]
    #[arg(long, global = true, value_name = "MS",
          value_parser = clap::value_parser!(u64).range(0..=MAX_DELAY_MS))]
    pub delay_ms: Option<u64>,

    /// Path to config file (auto-discovers deploy-tracker.config.yml if not specified)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the deployment status of one software ID
    Status(StatusArgs),
    /// Browse the software catalog
    Catalog(CatalogArgs),
}

#[derive(ClapArgs, Debug)]
pub struct StatusArgs {
    /// Software ID to look up (e.g. sw-001)
    #[arg(default_value = "")]
    pub app_id: String,

    /// Task status filter: all, SUCCEED, RUNNING or FAILED
    #[arg(long, default_value = "all")]
    pub status: StatusFilter,

    /// Task action filter: all, install, update or uninstall
    #[arg(long, default_value = "all")]
    pub action: ActionFilter,

    /// Case-insensitive hostname substring
    #[arg(long = "host", value_name = "TEXT", default_value = "")]
    pub host: String,

    /// Number of task IDs in the frequency ranking [default: 10]
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub top: Option<u64>,
}

#[derive(ClapArgs, Debug)]
pub struct CatalogArgs {
    /// Case-insensitive match on name, ID or owner
    #[arg(short, long, value_name = "TERM", default_value = "")]
    pub search: String,

    /// Listing status filter: all, listed or unlisted
    #[arg(long, default_value = "all")]
    pub status: CatalogStatusFilter,

    /// Open the deployment status view for this catalog entry
    #[arg(long, value_name = "ID")]
    pub open: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
