use actix_web::{middleware, web, App, HttpServer};
use anyhow::Context;
use assessment_api::config::ApiConfig;
use assessment_api::handlers::AppState;
use assessment_api::routes::configure_routes;
use assessment_api::seed::reset_and_seed;
use assessment_api::storage::Database;
use assessment_api::templates::Templates;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::SystemTime;
use tracing::info;

#[derive(Parser)]
#[command(name = "assessment-api")]
#[command(about = "Household assessment survey server")]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to <config dir>/assessment/api.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP server
    Serve,
    /// Drop all data, recreate the schema and load the question catalog
    InitDb,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let (config, config_path) =
        ApiConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    info!("Loaded configuration from {}", config_path.display());

    let database = Database::open(&config.database.path).with_context(|| {
        format!(
            "Failed to open database at {}",
            config.database.path.display()
        )
    })?;
    info!("Using database at {}", config.database.path.display());

    match cli.command.unwrap_or(Command::Serve) {
        Command::InitDb => {
            let count = reset_and_seed(&database)?;
            println!("Initialized the database and populated {count} questions.");
            Ok(())
        }
        Command::Serve => serve(config, database).await,
    }
}

async fn serve(config: ApiConfig, database: Database) -> anyhow::Result<()> {
    let bind_addr = format!("{}:{}", config.server.host, config.server.port);

    let state = web::Data::new(AppState {
        database: Arc::new(database),
        templates: Arc::new(Templates::new()?),
        config: Arc::new(config),
        start_time: SystemTime::now(),
    });

    info!("Starting assessment server at http://{}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::Logger::default())
            .configure(configure_routes)
    })
    .bind(&bind_addr)
    .with_context(|| format!("Failed to bind {bind_addr}"))?
    .run()
    .await?;

    Ok(())
}
