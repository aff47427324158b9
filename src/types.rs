use serde::{Deserialize, Serialize};

/// Canonical row shape shared by both pipelines. Field declaration order is
/// the CSV column order, so serializing a record writes the same layout the
/// importer reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub question: String,
    pub option_1: String,
    pub option_2: String,
    pub option_3: String,
    pub option_4: String,
    /// 1-based index into the four options. Not range-checked here; the
    /// destination schema owns that constraint.
    pub correct_answer: i64,
    pub category_id: Option<i64>,
    pub display_date: Option<String>,
    pub created_by: String,
    pub updated_by: Option<String>,
}

/// One item as returned by the trivia API.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiQuestion {
    pub question: QuestionText,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: String,
    #[serde(rename = "incorrectAnswers")]
    pub incorrect_answers: Vec<String>,
    pub category: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuestionText {
    pub text: String,
}
