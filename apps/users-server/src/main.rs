use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use api_ingress::{ApiIngress, ApiIngressConfig};
use runtime::{AppConfig, CliArgs};
use users_info::{UsersInfo, UsersInfoConfig};

mod shutdown;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Users API server - in-memory users CRUD over HTTP
#[derive(Parser)]
#[command(name = "users-server")]
#[command(about = "Users API server - in-memory users CRUD over HTTP")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print current configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Check configuration
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let args = CliArgs {
        config: cli.config.as_ref().map(|p| p.to_string_lossy().to_string()),
        port: cli.port,
        print_config: cli.print_config,
        verbose: cli.verbose,
    };

    // Load configuration (normalized home_dir is applied inside)
    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(&args);

    if cli.print_config {
        println!("{}", config.to_yaml()?);
        return Ok(());
    }

    let logging_config = config.logging.clone().unwrap_or_default();
    runtime::logging::init_logging_from_config(&logging_config, Path::new(&config.server.home_dir));
    tracing::info!("Users API server starting");

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(config),
    }
}

/// Module wiring shared by `run` and `check`.
fn build_modules(config: &AppConfig) -> Result<(UsersInfo, ApiIngress)> {
    let users_cfg: UsersInfoConfig = config.module_config("users_info")?;
    let users = UsersInfo::new(users_cfg).context("Failed to initialize users_info")?;

    let ingress_cfg: ApiIngressConfig = config.module_config("api_ingress")?;
    let timeout = (config.server.timeout_sec > 0)
        .then_some(Duration::from_secs(config.server.timeout_sec));
    let ingress = ApiIngress::new(ingress_cfg).with_request_timeout(timeout);

    Ok((users, ingress))
}

async fn run_server(config: AppConfig) -> Result<()> {
    tracing::info!("Initializing modules...");
    let (users, ingress) = build_modules(&config)?;

    let routes = users.register_rest(Router::new());
    let router = ingress.build_router(routes, Some(UsersInfo::openapi()))?;

    let addr = config.bind_addr();
    tracing::info!(%addr, docs = ingress.config().enable_docs, "Starting HTTP server");
    api_ingress::serve(router, &addr, shutdown::signal()).await?;

    tracing::info!("Users API server stopped");
    Ok(())
}

fn check_config(config: AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");

    build_modules(&config)?;
    config
        .bind_addr()
        .parse::<std::net::SocketAddr>()
        .with_context(|| format!("Invalid bind address '{}'", config.bind_addr()))?;

    tracing::info!("Configuration is valid");
    println!("Configuration check passed");
    println!("{}", config.to_yaml()?);

    Ok(())
}
