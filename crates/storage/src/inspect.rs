//! Read-only report over whatever database a URL points at.

use sqlx::{Row, SqlitePool};

use crate::sqlite::EXAMS_TABLE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachedDatabase {
    pub name: String,
    /// Empty for in-memory databases.
    pub file: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCount {
    pub name: String,
    pub rows: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatabaseReport {
    pub databases: Vec<AttachedDatabase>,
    pub tables: Vec<TableCount>,
}

impl DatabaseReport {
    #[must_use]
    pub fn has_exams_table(&self) -> bool {
        self.tables.iter().any(|t| t.name == EXAMS_TABLE)
    }
}

/// Collect attached databases and per-table row counts. Issues reads only.
///
/// # Errors
///
/// Returns `sqlx::Error` if any of the catalog or count queries fail.
pub async fn inspect_database(pool: &SqlitePool) -> Result<DatabaseReport, sqlx::Error> {
    let mut report = DatabaseReport::default();

    for row in sqlx::query("PRAGMA database_list").fetch_all(pool).await? {
        report.databases.push(AttachedDatabase {
            name: row.try_get("name")?,
            file: row.try_get("file")?,
        });
    }

    let names: Vec<String> = sqlx::query(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
    )
    .fetch_all(pool)
    .await?
    .iter()
    .map(|row| row.try_get::<String, _>("name"))
    .collect::<Result<_, _>>()?;

    for name in names {
        let rows: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM \"{name}\""))
            .fetch_one(pool)
            .await?;
        report.tables.push(TableCount { name, rows });
    }

    tracing::debug!(tables = report.tables.len(), "inspected database");
    Ok(report)
}
