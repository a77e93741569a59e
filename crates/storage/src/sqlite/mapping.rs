use exam_core::model::{ExamId, ExamSummary};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::repository::{ExamDocument, QuestionDocument, StorageError};

pub(crate) fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

pub(crate) fn exam_id_to_i64(id: ExamId) -> Result<i64, StorageError> {
    i64::try_from(id.value()).map_err(|_| StorageError::Serialization("exam_id overflow".into()))
}

fn i64_to_u64(field: &'static str, v: i64) -> Result<u64, StorageError> {
    u64::try_from(v).map_err(|_| StorageError::Serialization(format!("{field} sign overflow")))
}

fn i64_to_u32(field: &'static str, v: i64) -> Result<u32, StorageError> {
    u32::try_from(v).map_err(|_| StorageError::Serialization(format!("invalid {field}: {v}")))
}

/// Map a listing row (`question_count` computed in SQL) to a summary.
pub(crate) fn map_summary_row(row: &SqliteRow) -> Result<ExamSummary, StorageError> {
    Ok(ExamSummary {
        id: ExamId::new(i64_to_u64("id", row.try_get("id").map_err(ser)?)?),
        exam_number: i64_to_u32("exam_number", row.try_get("exam_number").map_err(ser)?)?,
        title: row.try_get("title").map_err(ser)?,
        description: row.try_get("description").map_err(ser)?,
        duration_minutes: i64_to_u32(
            "duration_minutes",
            row.try_get("duration_minutes").map_err(ser)?,
        )?,
        question_count: i64_to_u32("question_count", row.try_get("question_count").map_err(ser)?)?,
    })
}

/// Map a full row, decoding the `questions` JSON column.
pub(crate) fn map_document_row(row: &SqliteRow) -> Result<ExamDocument, StorageError> {
    let questions_json: String = row.try_get("questions").map_err(ser)?;
    let questions: Vec<QuestionDocument> = serde_json::from_str(&questions_json).map_err(ser)?;

    Ok(ExamDocument {
        id: i64_to_u64("id", row.try_get("id").map_err(ser)?)?,
        exam_number: i64_to_u32("exam_number", row.try_get("exam_number").map_err(ser)?)?,
        title: row.try_get("title").map_err(ser)?,
        description: row.try_get("description").map_err(ser)?,
        duration: i64_to_u32(
            "duration_minutes",
            row.try_get("duration_minutes").map_err(ser)?,
        )?,
        questions,
    })
}
