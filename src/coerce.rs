use std::collections::HashMap;

use crate::constants::DEFAULT_CREATED_BY;
use crate::error::{IngestError, Result};
use crate::types::QuestionRecord;

/// One untyped source row: column name to raw string value.
pub type RawRow = HashMap<String, String>;

/// Converts one untyped CSV row into a QuestionRecord, or rejects it.
///
/// Required fields must be present as keys; an empty value passes. The
/// optional fields coerce to NULL when absent or blank, except `created_by`
/// which defaults to "system" when the column is missing entirely. A failed
/// integer parse rejects the whole row; no partial record escapes.
pub fn coerce_row(row: &RawRow) -> Result<QuestionRecord> {
    let question = required(row, "question")?.to_string();
    let option_1 = required(row, "option_1")?.to_string();
    let option_2 = required(row, "option_2")?.to_string();
    let option_3 = required(row, "option_3")?.to_string();
    let option_4 = required(row, "option_4")?.to_string();

    // Parsed but deliberately not range-checked against the option count;
    // the destination schema owns that constraint.
    let correct_answer = parse_int("correct_answer", required(row, "correct_answer")?)?;

    let category_id = match row.get("category_id").map(|raw| raw.trim()) {
        Some(trimmed) if !trimmed.is_empty() => Some(parse_int("category_id", trimmed)?),
        _ => None,
    };

    // Passed through verbatim as text; no date-format validation.
    let display_date = row
        .get("display_date")
        .map(|raw| raw.trim())
        .filter(|trimmed| !trimmed.is_empty())
        .map(|trimmed| trimmed.to_string());

    let created_by = row
        .get("created_by")
        .cloned()
        .unwrap_or_else(|| DEFAULT_CREATED_BY.to_string());
    let updated_by = row.get("updated_by").cloned();

    Ok(QuestionRecord {
        question,
        option_1,
        option_2,
        option_3,
        option_4,
        correct_answer,
        category_id,
        display_date,
        created_by,
        updated_by,
    })
}

fn required<'a>(row: &'a RawRow, field: &str) -> Result<&'a str> {
    row.get(field)
        .map(String::as_str)
        .ok_or_else(|| IngestError::MissingField(field.to_string()))
}

fn parse_int(field: &str, raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| IngestError::TypeCoercion {
            field: field.to_string(),
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_row() -> RawRow {
        RawRow::from([
            ("question".to_string(), "What is 2+2?".to_string()),
            ("option_1".to_string(), "3".to_string()),
            ("option_2".to_string(), "4".to_string()),
            ("option_3".to_string(), "5".to_string()),
            ("option_4".to_string(), "6".to_string()),
            ("correct_answer".to_string(), "2".to_string()),
            ("category_id".to_string(), "7".to_string()),
            ("display_date".to_string(), "2024-05-01".to_string()),
            ("created_by".to_string(), "editor".to_string()),
            ("updated_by".to_string(), "reviewer".to_string()),
        ])
    }

    #[test]
    fn coerces_fully_populated_row() {
        let record = coerce_row(&full_row()).unwrap();
        assert_eq!(record.question, "What is 2+2?");
        assert_eq!(record.option_2, "4");
        assert_eq!(record.correct_answer, 2);
        assert_eq!(record.category_id, Some(7));
        assert_eq!(record.display_date, Some("2024-05-01".to_string()));
        assert_eq!(record.created_by, "editor");
        assert_eq!(record.updated_by, Some("reviewer".to_string()));
    }

    #[test]
    fn missing_required_field_names_the_field() {
        let mut row = full_row();
        row.remove("option_3");
        match coerce_row(&row) {
            Err(IngestError::MissingField(field)) => assert_eq!(field, "option_3"),
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn non_integer_correct_answer_is_a_coercion_error() {
        let mut row = full_row();
        row.insert("correct_answer".to_string(), "x".to_string());
        match coerce_row(&row) {
            Err(IngestError::TypeCoercion { field, value }) => {
                assert_eq!(field, "correct_answer");
                assert_eq!(value, "x");
            }
            other => panic!("expected TypeCoercion, got {other:?}"),
        }
    }

    #[test]
    fn out_of_range_correct_answer_is_accepted() {
        // No {1..4} range check at this layer; the table constraint decides.
        let mut row = full_row();
        row.insert("correct_answer".to_string(), "9".to_string());
        assert_eq!(coerce_row(&row).unwrap().correct_answer, 9);
    }

    #[test]
    fn blank_category_id_becomes_null() {
        let mut row = full_row();
        row.insert("category_id".to_string(), "   ".to_string());
        assert_eq!(coerce_row(&row).unwrap().category_id, None);

        row.remove("category_id");
        assert_eq!(coerce_row(&row).unwrap().category_id, None);
    }

    #[test]
    fn category_id_is_trimmed_before_parsing() {
        let mut row = full_row();
        row.insert("category_id".to_string(), " 7 ".to_string());
        assert_eq!(coerce_row(&row).unwrap().category_id, Some(7));
    }

    #[test]
    fn non_integer_category_id_rejects_the_row() {
        let mut row = full_row();
        row.insert("category_id".to_string(), "abc".to_string());
        assert!(matches!(
            coerce_row(&row),
            Err(IngestError::TypeCoercion { .. })
        ));
    }

    #[test]
    fn blank_display_date_becomes_null() {
        let mut row = full_row();
        row.insert("display_date".to_string(), "  ".to_string());
        assert_eq!(coerce_row(&row).unwrap().display_date, None);
    }

    #[test]
    fn audit_defaults_are_asymmetric() {
        let mut row = full_row();
        row.remove("created_by");
        row.remove("updated_by");
        let record = coerce_row(&row).unwrap();
        assert_eq!(record.created_by, "system");
        assert_eq!(record.updated_by, None);
    }

    #[test]
    fn present_but_empty_audit_values_pass_through() {
        let mut row = full_row();
        row.insert("created_by".to_string(), String::new());
        row.insert("updated_by".to_string(), String::new());
        let record = coerce_row(&row).unwrap();
        assert_eq!(record.created_by, "");
        assert_eq!(record.updated_by, Some(String::new()));
    }

    #[test]
    fn empty_required_value_still_passes_presence_check() {
        let mut row = full_row();
        row.insert("question".to_string(), String::new());
        assert_eq!(coerce_row(&row).unwrap().question, "");
    }
}
