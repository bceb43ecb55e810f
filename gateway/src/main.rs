use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::anyhow;
use axum_server::tls_rustls::RustlsConfig;
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::info;

use practice_gateway::{BUILD_ID, PracticeRegistry, ServerConfig, routes, state::AppState};

/// Practice Gateway - multi-tenant practice front end with a Play.ht speech proxy
#[derive(Parser, Debug)]
#[command(name = "practice-gateway")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to configuration file (YAML)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Commands {
    /// Run the HTTP server (default)
    Serve,

    /// Print the practice catalog (id and subdomain)
    Practices,

    /// Print the build identifier
    BuildId,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists (must be done before config loading)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Initialize crypto provider for TLS connections
    // This must be done before any TLS connections are attempted
    rustls::crypto::ring::default_provider()
        .install_default()
        .map_err(|_| anyhow!("Failed to install default crypto provider"))?;

    // Parse CLI arguments
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::BuildId => {
            println!("{BUILD_ID}");
            Ok(())
        }
        Commands::Practices => {
            for practice in PracticeRegistry::new().all() {
                println!(
                    "{}\t{}\t{}\t{}",
                    practice.id, practice.subdomain, practice.practice_type, practice.name
                );
            }
            Ok(())
        }
        Commands::Serve => serve(cli.config).await,
    }
}

async fn serve(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    // Load configuration from file or environment
    let config = if let Some(config_path) = config_path {
        println!("Loading configuration from {}", config_path.display());
        ServerConfig::from_file(&config_path)?
    } else {
        ServerConfig::from_env()?
    };

    let address = config.address();
    let tls_config = config.tls.clone();
    println!("Starting server on {address} (build {BUILD_ID})");

    // Create application state
    let app_state = AppState::new(config)?;

    let practice = app_state.registry.default_practice();
    if app_state.registry.is_pinned() {
        info!(
            practice_id = practice.id,
            "Deployment pinned, every request is served this practice"
        );
    } else {
        info!(
            default_practice = practice.id,
            "Selecting practice per request from the host"
        );
    }

    let app = routes::build_router(app_state);

    // Parse socket address
    let socket_addr: SocketAddr = address
        .parse()
        .map_err(|e| anyhow!("Invalid server address '{}': {}", address, e))?;

    // Start server with or without TLS
    if let Some(tls) = tls_config {
        // Load TLS configuration from certificate and key files
        let rustls_config = RustlsConfig::from_pem_file(&tls.cert_path, &tls.key_path)
            .await
            .map_err(|e| {
                anyhow!(
                    "Failed to load TLS certificates from {} and {}: {}",
                    tls.cert_path.display(),
                    tls.key_path.display(),
                    e
                )
            })?;

        println!("Server listening on https://{} (TLS enabled)", socket_addr);

        axum_server::bind_rustls(socket_addr, rustls_config)
            .serve(app.into_make_service_with_connect_info::<SocketAddr>())
            .await
            .map_err(|e| anyhow!("TLS server error: {}", e))?;
    } else {
        println!("Server listening on http://{}", socket_addr);

        let listener = TcpListener::bind(&socket_addr).await?;
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await?;
    }

    Ok(())
}
