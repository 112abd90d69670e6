use analytics::{ChartSet, Dashboard, DashboardState, DashboardSummary, FetchFailure};
use api_client::{Session, ShopClient};
use clap::{Parser, Subcommand};
use configuration::LogFormat;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

mod render;

/// The main entry point for the shop analytics dashboard.
///
/// All continuation logic runs on a single thread; the five analytics
/// requests only overlap at the I/O layer.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load SHOPDASH__* overrides from a .env file, if there is one.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let mut config = configuration::load_config(&cli.config)?;
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
        configuration::validate(&config)?;
    }
    if let Some(format) = cli.log_format {
        config.logging.format = format;
    }
    let _log_guard = configuration::init_tracing(&config.logging)?;

    let session = Session::from_config(&config.session);
    tracing::info!(
        base_url = %config.api.base_url,
        identity = session.identity().unwrap_or("anonymous"),
        authenticated = session.is_authenticated(),
        "Connecting to shop backend."
    );
    let client = ShopClient::new(&config.api, &session)?;

    // Execute the appropriate command
    match cli.command {
        Commands::Dashboard => handle_dashboard(client).await,
        Commands::Export(args) => handle_export(client, args).await,
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Admin analytics for the online shop.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file. A missing file means defaults.
    #[arg(long, global = true, default_value = "config.toml")]
    config: PathBuf,

    /// Overrides `api.base_url`.
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Overrides `logging.format`.
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the analytics and draw the dashboard in the terminal.
    Dashboard,
    /// Fetch the analytics and print chart input and summary as JSON.
    Export(ExportArgs),
}

#[derive(Parser)]
struct ExportArgs {
    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

/// The document written by `export`.
#[derive(Serialize)]
struct Export {
    charts: ChartSet,
    summary: DashboardSummary,
}

// ==============================================================================
// Command Logic
// ==============================================================================

/// Mounts the dashboard once and waits for it to settle, showing a spinner
/// while it is loading.
async fn load(client: ShopClient) -> DashboardState {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Loading analytics...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let mut dashboard = Dashboard::mount(Arc::new(client));
    let state = dashboard.settled().await;

    spinner.finish_and_clear();
    state
}

async fn handle_dashboard(client: ShopClient) -> anyhow::Result<()> {
    match load(client).await {
        DashboardState::Ready(aggregate) => {
            let charts = ChartSet::from_aggregate(&aggregate);
            let summary = DashboardSummary::from_aggregate(&aggregate);
            println!("{}", render::dashboard(&charts, &summary));
            Ok(())
        }
        // A static failure message replaces the dashboard.
        DashboardState::Loading | DashboardState::Failed => Err(FetchFailure.into()),
    }
}

async fn handle_export(client: ShopClient, args: ExportArgs) -> anyhow::Result<()> {
    let state = load(client).await;
    let (Some(charts), Some(summary)) = (state.charts(), state.summary()) else {
        return Err(FetchFailure.into());
    };

    let export = Export { charts, summary };
    let json = if args.pretty {
        serde_json::to_string_pretty(&export)?
    } else {
        serde_json::to_string(&export)?
    };
    println!("{}", json);
    Ok(())
}
