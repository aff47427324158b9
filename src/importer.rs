use std::path::Path;

use rusqlite::Connection;
use tracing::{error, info, warn};

use crate::coerce::{coerce_row, RawRow};
use crate::constants::{DB_FILE, TABLE_NAME};
use crate::csv_io;
use crate::error::Result;
use crate::store;
use crate::types::QuestionRecord;

pub struct ImportSummary {
    pub inserted: usize,
    pub skipped: usize,
}

/// Runs the importer pipeline end to end: pre-flight checks, CSV read,
/// per-row coercion, one atomic batch insert. Every failure is reported
/// here as a user-facing diagnostic; nothing escapes as a process fault.
pub fn run_import(csv_path: &Path) {
    if !Path::new(DB_FILE).exists() {
        error!("Database file not found at {DB_FILE}");
        println!("❌ Error: database file not found at {DB_FILE}");
        return;
    }
    if !csv_path.exists() {
        error!("CSV file not found at {}", csv_path.display());
        println!("❌ Error: CSV file not found at {}", csv_path.display());
        return;
    }

    println!("Reading data from: {}", csv_path.display());
    match import_into(csv_path, Path::new(DB_FILE)) {
        Ok(summary) => {
            println!(
                "✅ Successfully imported {} rows into {} ({} skipped).",
                summary.inserted, TABLE_NAME, summary.skipped
            );
        }
        Err(e) => {
            error!("Import failed: {e}");
            println!("❌ Import failed: {e}");
        }
    }
}

/// The testable core of the importer: reads `csv_path`, validates every
/// data row, and writes the survivors to the database at `db_path` in one
/// batch. The connection is released on every exit path by drop.
pub fn import_into(csv_path: &Path, db_path: &Path) -> Result<ImportSummary> {
    let rows = csv_io::read_rows(csv_path)?;
    let (records, skipped) = collect_records(rows);
    info!(
        valid = records.len(),
        skipped, "Validated rows from {}", csv_path.display()
    );

    let mut conn = Connection::open(db_path)?;
    let inserted = store::insert_questions(&mut conn, &records)?;
    Ok(ImportSummary { inserted, skipped })
}

/// Coerces each raw row, skipping bad ones with a diagnostic that names the
/// 1-based source row number. A bad row never aborts the batch.
pub fn collect_records(
    rows: Vec<(usize, std::result::Result<RawRow, csv::Error>)>,
) -> (Vec<QuestionRecord>, usize) {
    let mut records = Vec::new();
    let mut skipped = 0;

    for (row_number, row) in rows {
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                skipped += 1;
                warn!(row_number, "Skipping unparseable row: {e}");
                println!("Warning: skipping row {row_number}: {e}");
                continue;
            }
        };
        match coerce_row(&row) {
            Ok(record) => records.push(record),
            Err(e) => {
                skipped += 1;
                warn!(row_number, "Skipping row: {e}");
                println!("Warning: skipping row {row_number}: {e}");
            }
        }
    }

    (records, skipped)
}
