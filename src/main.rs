// src/main.rs
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

use roi_dashboard::dashboard::Dashboard;
use roi_dashboard::source::load_table;
use roi_dashboard::{build_table, format_currency, format_percent, ApiClient, Config, TableSource};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Command-line client for the marketing ROI dashboard
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// YAML config file (defaults to ./dashboard.yaml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Dashboard server address, overrides the config file
    #[arg(short, long, global = true, env = "ROI_DASHBOARD_URL")]
    base_url: Option<String>,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the standalone dashboard page
    Report {
        /// Output HTML file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print an HTML table from a CSV file or a JSON endpoint
    Table {
        source: String,

        #[arg(long)]
        header_color: Option<String>,
    },
    /// GET an endpoint and print the response
    Fetch {
        endpoint: String,

        /// Print the raw body instead of pretty JSON
        #[arg(long)]
        text: bool,
    },
    /// Format a number the way the dashboard displays it
    Format {
        #[arg(value_enum)]
        kind: FormatKind,

        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatKind {
    Currency,
    Percent,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = Config::load(args.config.as_deref()).context("Failed to load configuration")?;
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }

    let client = ApiClient::new(config.base_url.clone());

    match args.command {
        Command::Report { output } => {
            let output = output.unwrap_or_else(|| config.output.clone());
            log::info!("ROI Dashboard v{} building report from {}", VERSION, client.base_url());

            let page = Dashboard::new(&client, &config)
                .render()
                .await
                .context("Failed to build dashboard")?;

            fs::write(&output, page)
                .with_context(|| format!("Failed to write report to {:?}", output))?;
            log::info!("Report written to {}", output.display());
        }

        Command::Table { source, header_color } => {
            let source = TableSource::parse(&source);
            let data = load_table(&source, &client, &config.hidden_columns)
                .await
                .with_context(|| format!("Failed to load table from {:?}", source))?;

            let header_color = header_color.unwrap_or_else(|| config.header_color.clone());
            println!("{}", build_table(&data.rows, &data.columns, Some(header_color.as_str())));
        }

        Command::Fetch { endpoint, text } => {
            if text {
                let body = client
                    .fetch_text(&endpoint)
                    .await
                    .with_context(|| format!("Failed to fetch {}", endpoint))?;
                println!("{}", body);
            } else {
                let body: Value = client
                    .fetch_json(&endpoint)
                    .await
                    .with_context(|| format!("Failed to fetch {}", endpoint))?;
                println!("{}", serde_json::to_string_pretty(&body)?);
            }
        }

        Command::Format { kind, value } => {
            let formatted = match kind {
                FormatKind::Currency => format_currency(value),
                FormatKind::Percent => format_percent(value),
            };
            println!("{}", formatted);
        }
    }

    Ok(())
}
