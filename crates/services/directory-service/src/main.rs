//! Directory Service - schema management for the user directory.
//!
//! Manages the `users` and `user_attributes` tables the gateway searches
//! when listing users by attribute.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use directory_service_lib::MigrateAction;

#[derive(Parser)]
#[command(name = "directory-service")]
#[command(about = "Manage the user directory schema (users and their string attributes)")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Directory schema migrations
    Migrate {
        #[command(subcommand)]
        action: MigrateCommands,
    },
}

#[derive(Subcommand)]
enum MigrateCommands {
    /// Create any missing directory tables and indexes
    Up,
    /// Roll back the most recent directory migration
    Down,
    /// List directory migrations and whether each is applied
    Status,
    /// Drop all directory tables and re-create them empty
    Fresh,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Migrate { action } => {
            let migrate_action = match action {
                MigrateCommands::Up => MigrateAction::Up,
                MigrateCommands::Down => MigrateAction::Down,
                MigrateCommands::Status => MigrateAction::Status,
                MigrateCommands::Fresh => MigrateAction::Fresh,
            };
            directory_service_lib::run_migrations(migrate_action).await?;
        }
    }

    Ok(())
}
