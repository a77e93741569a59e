use std::fmt;
use std::path::PathBuf;

use storage::connection::DATABASE_URL_ENV;
use storage::repository::{ExamDocument, ExamRepository, ExamWriteRepository, StorageError};
use storage::sqlite::SqliteRepository;

const SAMPLE_EXAMS: &str = include_str!("../../seed/sample_exams.json");

#[derive(Debug, Clone)]
struct Args {
    db_url: String,
    file: Option<PathBuf>,
    dry_run: bool,
}

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    MissingDbUrl,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::MissingDbUrl => {
                write!(f, "no database given: pass --db or set {DATABASE_URL_ENV}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

impl Args {
    fn parse() -> Result<Self, ArgsError> {
        let mut db_url = std::env::var(DATABASE_URL_ENV).ok();
        let mut file = None;
        let mut dry_run = false;

        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(&mut args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = Some(value);
                }
                "--file" => {
                    let value = require_value(&mut args, "--file")?;
                    file = Some(PathBuf::from(value));
                }
                "--dry-run" => dry_run = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        let db_url = db_url
            .filter(|url| !url.trim().is_empty())
            .ok_or(ArgsError::MissingDbUrl)?;
        Ok(Self {
            db_url,
            file,
            dry_run,
        })
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p storage --bin seed -- [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --db <sqlite_url>         SQLite URL (default: ${DATABASE_URL_ENV})");
    eprintln!("  --file <path.json>        JSON array of exam documents (default: built-in samples)");
    eprintln!("  --dry-run                 Validate documents without writing");
    eprintln!("  -h, --help                Show this help");
}

fn load_documents(file: Option<&PathBuf>) -> Result<Vec<ExamDocument>, Box<dyn std::error::Error>> {
    let raw = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => SAMPLE_EXAMS.to_string(),
    };
    Ok(serde_json::from_str(&raw)?)
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse().map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let documents = load_documents(args.file.as_ref())?;
    let mut exams = Vec::with_capacity(documents.len());
    for document in documents {
        let id = document.id;
        let exam = document.into_exam().map_err(|e| {
            tracing::error!(exam_id = id, error = %e, "invalid exam document");
            e
        })?;
        exams.push(exam);
    }

    if args.dry_run {
        println!("Validated {} exams; nothing written.", exams.len());
        return Ok(());
    }

    let repo = SqliteRepository::connect(&args.db_url).await?;
    repo.migrate().await?;

    for exam in &exams {
        repo.upsert_exam(exam).await?;
        let stored = repo
            .get_exam(exam.id())
            .await?
            .ok_or(StorageError::NotFound)?;
        tracing::info!(
            exam_id = %stored.id(),
            questions = stored.question_count(),
            "seeded exam"
        );
    }

    println!("Seeded {} exams into {}", exams.len(), args.db_url);
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

    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
