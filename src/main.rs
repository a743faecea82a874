//! spacex-dash CLI - Interactive SpaceX launch records dashboard
//!
//! Runs the dashboard server by default; `summary` and `figures` inspect the
//! dataset from the terminal.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

use spacex_dash::{
    callback::{ComponentValues, FilterSelection},
    dashboard,
    data::LaunchTable,
    layout::Layout,
    server::{self, AppState},
};

/// spacex-dash: SpaceX launch records dashboard
#[derive(Parser, Debug)]
#[command(name = "spacex-dash")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the dashboard over HTTP (default)
    Serve(ServeArgs),

    /// Print a summary of the launch records
    Summary(SummaryArgs),

    /// Print the figures for a site and payload range as JSON
    Figures(FiguresArgs),
}

#[derive(Args, Debug)]
struct DataArgs {
    /// Path to the launch records CSV
    #[arg(long, env = "SPACEX_DASH_DATA", default_value = "spacex_launch_dash.csv")]
    data_file: PathBuf,
}

#[derive(Parser, Debug)]
struct ServeArgs {
    #[command(flatten)]
    data: DataArgs,

    /// Address to bind
    #[arg(long, env = "SPACEX_DASH_HOST", default_value = "127.0.0.1")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "SPACEX_DASH_PORT", default_value = "8050")]
    port: u16,
}

#[derive(Parser, Debug)]
struct SummaryArgs {
    #[command(flatten)]
    data: DataArgs,
}

#[derive(Parser, Debug)]
struct FiguresArgs {
    #[command(flatten)]
    data: DataArgs,

    /// Dropdown site code (ALL, site1..site4)
    #[arg(short, long, default_value = "ALL")]
    site: String,

    /// Lower payload bound in kg (defaults to the smallest payload)
    #[arg(long)]
    payload_min: Option<f64>,

    /// Upper payload bound in kg (defaults to the largest payload)
    #[arg(long)]
    payload_max: Option<f64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    match cli.command {
        Some(Commands::Serve(args)) => serve_command(args).await,
        Some(Commands::Summary(args)) => summary_command(args),
        Some(Commands::Figures(args)) => figures_command(args),
        None => serve_command(ServeArgs::parse_from(["serve"])).await,
    }
}

/// Load the launch table, failing fast on a malformed file
fn load_table(args: &DataArgs) -> Result<LaunchTable> {
    info!("Loading launch records from {:?}", args.data_file);
    let table = LaunchTable::load_from_file(&args.data_file)
        .with_context(|| format!("Failed to load launch records: {:?}", args.data_file))?;

    info!(
        "Loaded {} launch records (payload {} kg .. {} kg)",
        table.len(),
        table.min_payload(),
        table.max_payload()
    );
    Ok(table)
}

/// Serve the dashboard until Ctrl+C
async fn serve_command(args: ServeArgs) -> Result<()> {
    let table = Arc::new(load_table(&args.data)?);
    let state = Arc::new(AppState::new(table));
    debug!("Registered {} callbacks", state.registry.callbacks().len());

    let addr = SocketAddr::new(args.host, args.port);
    server::serve(state, addr)
        .await
        .with_context(|| format!("Dashboard server failed on {}", addr))?;

    Ok(())
}

/// Print a dataset summary
fn summary_command(args: SummaryArgs) -> Result<()> {
    let table = load_table(&args.data)?;
    print!("{}", table.summary().to_text());
    Ok(())
}

/// Print both figures for one selection
fn figures_command(args: FiguresArgs) -> Result<()> {
    let table = load_table(&args.data)?;
    let layout = Layout::for_table(&table);

    let [default_min, default_max] = layout.payload_slider.value;
    let values = ComponentValues {
        site: Some(args.site),
        payload: Some([
            args.payload_min.unwrap_or(default_min),
            args.payload_max.unwrap_or(default_max),
        ]),
    };
    let selection = FilterSelection::from_values(&values, &layout);

    let updates = dashboard::callback_registry().dispatch(&table, None, &selection)?;
    println!("{}", serde_json::to_string_pretty(&updates)?);

    Ok(())
}
