use rusqlite::{params, Connection};
use tracing::info;

use crate::constants::{COLUMNS, TABLE_NAME};
use crate::error::Result;
use crate::types::QuestionRecord;

/// Persists all records to the quiz_questions table in one transaction.
///
/// Only the static column list is interpolated into the statement text;
/// every row value is a bound parameter. A failure on any row rolls the
/// whole batch back, so the table never ends up partially written.
pub fn insert_questions(conn: &mut Connection, records: &[QuestionRecord]) -> Result<usize> {
    let placeholders = (1..=COLUMNS.len())
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        TABLE_NAME,
        COLUMNS.join(", "),
        placeholders
    );

    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare(&sql)?;
        for record in records {
            stmt.execute(params![
                record.question,
                record.option_1,
                record.option_2,
                record.option_3,
                record.option_4,
                record.correct_answer,
                record.category_id,
                record.display_date,
                record.created_by,
                record.updated_by,
            ])?;
        }
    }
    tx.commit()?;

    info!("Inserted {} rows into {}", records.len(), TABLE_NAME);
    Ok(records.len())
}
