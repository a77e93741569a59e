use storage::connection::{DATABASE_URL_ENV, open_unmigrated};
use storage::inspect::inspect_database;
use storage::sqlite::EXAMS_TABLE;

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let url = std::env::var(DATABASE_URL_ENV).ok();
    let repo = open_unmigrated(url.as_deref()).await?;
    let report = inspect_database(repo.pool()).await?;

    for db in &report.databases {
        let file = if db.file.is_empty() { "(memory)" } else { db.file.as_str() };
        println!("Database: {} -> {file}", db.name);
    }

    println!("Tables:");
    for table in &report.tables {
        println!("  {}: {} rows", table.name, table.rows);
    }

    if report.has_exams_table() {
        println!("Expected table `{EXAMS_TABLE}` is present.");
    } else {
        println!("Expected table `{EXAMS_TABLE}` is missing.");
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    tracing::info!(env = DATABASE_URL_ENV, "inspecting exam database");
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
