use chrono::Utc;
use exam_core::model::{Exam, ExamId, ExamSummary};

use super::SqliteRepository;
use super::mapping::{exam_id_to_i64, map_document_row, map_summary_row, ser};
use crate::repository::{
    ExamDocument, ExamRepository, ExamWriteRepository, StorageError,
};

#[async_trait::async_trait]
impl ExamRepository for SqliteRepository {
    async fn list_exams(&self) -> Result<Vec<ExamSummary>, StorageError> {
        let rows = sqlx::query(
            r"
            SELECT id, exam_number, title, description, duration_minutes,
                   json_array_length(questions) AS question_count
            FROM exams
            ORDER BY exam_number ASC, id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        let mut exams = Vec::with_capacity(rows.len());
        for row in rows {
            exams.push(map_summary_row(&row)?);
        }
        tracing::debug!(count = exams.len(), "listed exams");
        Ok(exams)
    }

    async fn get_exam(&self, id: ExamId) -> Result<Option<Exam>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT id, exam_number, title, description, duration_minutes, questions
            FROM exams WHERE id = ?1
            ",
        )
        .bind(exam_id_to_i64(id)?)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        match row {
            Some(row) => {
                let exam = map_document_row(&row)?.into_exam()?;
                Ok(Some(exam))
            }
            None => Ok(None),
        }
    }
}

#[async_trait::async_trait]
impl ExamWriteRepository for SqliteRepository {
    async fn upsert_exam(&self, exam: &Exam) -> Result<(), StorageError> {
        let document = ExamDocument::from_exam(exam);
        let questions = serde_json::to_string(&document.questions).map_err(ser)?;

        sqlx::query(
            r"
            INSERT INTO exams (id, exam_number, title, description, duration_minutes, questions, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            ON CONFLICT(id) DO UPDATE SET
                exam_number = excluded.exam_number,
                title = excluded.title,
                description = excluded.description,
                duration_minutes = excluded.duration_minutes,
                questions = excluded.questions,
                updated_at = excluded.updated_at
            ",
        )
        .bind(exam_id_to_i64(exam.id())?)
        .bind(i64::from(document.exam_number))
        .bind(document.title)
        .bind(document.description)
        .bind(i64::from(document.duration))
        .bind(questions)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        tracing::debug!(exam_id = %exam.id(), "upserted exam");
        Ok(())
    }
}
