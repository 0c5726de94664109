//! CLI for the Space-to-Notion migration.
//!
//! Fetches every issue from a JetBrains Space organization and recreates
//! the issue tree as pages of a Notion database.

use clap::Parser;
use space_to_notion::{fetch_issues, MigrationSummary, Migrator, NotionApi};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Space to Notion - Migrate JetBrains Space issues into a Notion database.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the Space organization (e.g. https://org.jetbrains.space).
    #[arg(long, env = "SPACE_URL")]
    space_url: String,

    /// Space permanent token with project and chat read access.
    #[arg(long, env = "SPACE_TOKEN")]
    space_token: String,

    /// Notion integration token.
    #[arg(long, env = "NOTION_TOKEN")]
    notion_token: String,

    /// Notion page the migrated databases are created under.
    #[arg(long, env = "NOTION_ROOT_PAGE_ID")]
    notion_root_page_id: String,

    /// Title of the created issue database.
    #[arg(long, env = "NOTION_DATABASE_TITLE", default_value = "Space Issues")]
    notion_database_title: String,
}

/// Errors that can end a migration run.
#[derive(Debug, thiserror::Error)]
enum CliError {
    /// Fetching issues from Space failed.
    #[error(transparent)]
    Fetch(#[from] space_to_notion::SpaceError),

    /// The migration itself failed.
    #[error(transparent)]
    Migrate(#[from] space_to_notion::MigratorError),
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();

    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Migration failed");
            ExitCode::FAILURE
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic: fetch, then migrate.
async fn run(args: Args) -> Result<MigrationSummary, CliError> {
    let issues = fetch_issues(&args.space_url, &args.space_token).await?;
    info!(count = issues.len(), "Fetched issues, starting migration");

    let migrator = Migrator::new(NotionApi::new(args.notion_token), &args.space_url);
    let summary = migrator
        .execute(&args.notion_root_page_id, &args.notion_database_title, issues)
        .await?;

    Ok(summary)
}

/// Prints the final run summary.
fn print_summary(summary: &MigrationSummary) {
    println!("\nSummary:");
    println!("  Issues migrated: {}", summary.issues_migrated);
    println!(
        "  Attachment pages created: {}",
        summary.attachment_pages_created
    );
    println!("  Comments created: {}", summary.comments_created);
}
