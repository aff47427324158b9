use std::path::Path;

use crate::coerce::RawRow;
use crate::error::Result;
use crate::types::QuestionRecord;

/// Reads a CSV file into per-row column maps, each tagged with its 1-based
/// source row number (the header counts as row 1, so the first data row is
/// row 2). Rows the CSV parser itself rejects are surfaced as errors so the
/// caller can skip them with a numbered diagnostic.
pub fn read_rows(path: &Path) -> Result<Vec<(usize, std::result::Result<RawRow, csv::Error>)>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let rows = reader
        .deserialize::<RawRow>()
        .enumerate()
        .map(|(idx, result)| (idx + 2, result))
        .collect();
    Ok(rows)
}

/// Serializes the records to `path` with a header row taken from the
/// QuestionRecord field names. No re-validation happens here; rows arriving
/// at this stage are well-formed by construction.
pub fn write_questions(path: &Path, records: &[QuestionRecord]) -> Result<usize> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(records.len())
}
