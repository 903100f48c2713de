mod config;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use config::{GatewayConfig, Overrides};
use ibgate_api::{AppState, ErrorStatusMode};
use ibgate_forwarder::Forwarder;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "ibgate")]
#[command(about = "Pass-through HTTP gateway for the Interactive Brokers Client Portal API")]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    /// Path to a TOML configuration file
    #[arg(short, long, env = "IBGATE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the gateway server
    Serve {
        #[command(flatten)]
        overrides: Overrides,
    },

    /// List every exposed route
    Routes {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration as TOML
    Config {
        #[command(flatten)]
        overrides: Overrides,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    match cli.log_format {
        LogFormat::Text => fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init(),
        LogFormat::Json => fmt()
            .json()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init(),
    }

    match cli.command {
        Commands::Serve { overrides } => {
            let config = GatewayConfig::load(cli.config.as_deref())?.apply(&overrides);
            serve(config).await?;
        }
        Commands::Routes { json } => print_routes(json)?,
        Commands::Config { overrides } => {
            let config = GatewayConfig::load(cli.config.as_deref())?.apply(&overrides);
            config.validate()?;
            print!("{}", config.to_toml()?);
        }
    }

    Ok(())
}

async fn serve(config: GatewayConfig) -> Result<()> {
    config.validate()?;

    if config.upstream.insecure_tls {
        tracing::warn!(
            upstream = %config.upstream.base_url,
            "upstream TLS certificate validation is disabled"
        );
    }
    if config.error_status == ErrorStatusMode::Mapped {
        tracing::info!("error envelopes carry upstream status codes");
    }

    let forwarder = Forwarder::http(config.upstream.clone())?;
    tracing::info!(
        upstream = %forwarder.base_url(),
        standard_secs = config.upstream.timeouts.standard_secs,
        extended_secs = config.upstream.timeouts.extended_secs,
        long_secs = config.upstream.timeouts.long_secs,
        "Starting gateway"
    );

    let state = Arc::new(AppState::new(forwarder, config.error_status));
    ibgate_api::start_server(state, &config.bind).await
}

fn print_routes(json: bool) -> Result<()> {
    let routes = ibgate_api::inventory();
    if json {
        println!("{}", serde_json::to_string_pretty(&routes)?);
        return Ok(());
    }

    let mut domain = "";
    for route in &routes {
        if route.domain != domain {
            domain = route.domain;
            println!("\n[{}]", domain);
        }
        println!("  {:<7} {:<60} {}", route.method, route.path, route.summary);
    }
    println!("\n{} routes", routes.len());
    Ok(())
}
