use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;
use unbored_core::client::ActivityClient;
use unbored_web::config::{AppConfig, RunMode};
use unbored_web::http_server;
use unbored_web::render::PageRenderer;

#[derive(Parser, Debug)]
#[command(name = "unbored", about = "Web front-end for the bored activity API")]
struct Args {
    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Run mode (development or production)
    #[arg(short, long)]
    mode: Option<RunMode>,

    /// Base URL of the remote activity API
    #[arg(long)]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    // Pick up a .env file before reading environment overrides
    dotenvy::dotenv().ok();

    // Parse command line args
    let args = Args::parse();

    // Load config from file, environment, then CLI args
    let mut config = match AppConfig::resolve(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(error = %e, "Failed to load configuration");
            return Err(anyhow::anyhow!("Configuration error: {}", e));
        }
    };

    if let Some(port) = args.port {
        config.listen_port = port;
    }

    if let Some(mode) = args.mode {
        config.mode = mode;
    }

    if let Some(api_url) = args.api_url {
        config.api.base_url = api_url;
    }

    info!(mode = %config.mode, "Starting unbored");

    // Initialize the activity API client
    let client = match ActivityClient::new(&config.api) {
        Ok(client) => {
            info!("Initialized activity client for {}", config.api.base_url);
            client
        }
        Err(e) => {
            error!(error = %e, "Failed to initialize activity client");
            return Err(anyhow::anyhow!("Failed to initialize activity client: {}", e));
        }
    };

    // Load the page templates
    let renderer = match PageRenderer::from_dir(&config.templates_dir) {
        Ok(renderer) => renderer,
        Err(e) => {
            error!(error = %e, "Failed to load page templates");
            return Err(anyhow::anyhow!("Failed to load page templates: {}", e));
        }
    };

    http_server::run_server(config, client, renderer).await
}
