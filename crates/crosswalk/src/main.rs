use anyhow::Result;
use clap::{Parser, Subcommand};
use crosswalk_common::{logger, AppConfig};
use crosswalk_server::{find_matches, AppState, MatchQuery, MatchRequest};
use std::path::PathBuf;

/// Find project root by looking for .git directory
fn find_project_root() -> Option<PathBuf> {
    let mut current_dir = std::env::current_dir().ok()?;

    loop {
        if current_dir.join(".git").exists() {
            return Some(current_dir);
        }

        if !current_dir.pop() {
            break;
        }
    }

    None
}

/// Load .env file from project root
fn load_dotenv_from_project_root() {
    if let Some(root) = find_project_root() {
        let env_path = root.join(".env");
        if env_path.exists() {
            dotenv::from_path(&env_path).ok();
        }
    } else {
        // Fallback to default dotenv behavior
        dotenv::dotenv().ok();
    }
}

#[derive(Parser)]
#[command(name = "crosswalk")]
#[command(about = "Crosswalk - match curricular standards across jurisdictions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long)]
        port: Option<u16>,

        /// Serve from a JSON catalog instead of Supabase
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Run one match and print the JSON result
    Match {
        /// Source standard id
        standard_id: String,

        /// Target jurisdiction id
        jurisdiction_id: String,

        /// Number of matches
        #[arg(long)]
        count: Option<String>,

        /// Match against a JSON catalog instead of Supabase
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

fn load_config(catalog: Option<PathBuf>) -> Result<AppConfig> {
    let mut config = AppConfig::from_env()?;
    if catalog.is_some() {
        config.catalog_path = catalog;
    }
    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // AppConfig::from_env() also loads .env from the working directory;
    // the project root one is loaded first so it wins.
    load_dotenv_from_project_root();

    match cli.command {
        Some(Commands::Match {
            standard_id,
            jurisdiction_id,
            count,
            catalog,
        }) => {
            let config = load_config(catalog)?;
            logger::setup_console_logging("warn")?;

            let query = MatchQuery {
                standard_id: Some(standard_id),
                jurisdiction_id: Some(jurisdiction_id),
                count,
            };
            let request = MatchRequest::from_query(&query, config.max_match_count)?;
            let state = AppState::new(config)?;

            let result = find_matches(&state, &request).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Some(Commands::Serve {
            host,
            port,
            catalog,
        }) => {
            let mut config = load_config(catalog)?;
            if let Some(host) = host {
                config.server_host = host;
            }
            if let Some(port) = port {
                config.server_port = port;
            }
            config.validate()?;

            logger::setup_logging(&config.log_dir, &config.log_level)?;

            tracing::info!("Crosswalk starting...");
            tracing::info!("  Bind: {}", config.server_bind_address());
            match &config.catalog_path {
                Some(path) => tracing::info!("  Catalog: {}", path.display()),
                None => tracing::info!(
                    "  Record store: {}",
                    config.store_url.as_deref().unwrap_or_default()
                ),
            }

            crosswalk_server::start_server(config).await?;
        }
        None => {
            // Default: start server with environment configuration
            let config = load_config(None)?;
            logger::setup_logging(&config.log_dir, &config.log_level)?;

            tracing::info!("Crosswalk starting with default configuration...");

            crosswalk_server::start_server(config).await?;
        }
    }

    Ok(())
}
