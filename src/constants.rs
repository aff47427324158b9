/// Fixed destination for the importer pipeline. The database file and the
/// quiz_questions table must already exist; nothing here creates schema.
pub const DB_FILE: &str = "public/quiz.db";
pub const TABLE_NAME: &str = "quiz_questions";

/// Column order shared by the insert statement and the CSV layout.
pub const COLUMNS: [&str; 10] = [
    "question",
    "option_1",
    "option_2",
    "option_3",
    "option_4",
    "correct_answer",
    "category_id",
    "display_date",
    "created_by",
    "updated_by",
];

// Fetch pipeline defaults (overridable via config.toml)
pub const FETCH_BATCH_SIZE: usize = 50;
pub const FETCH_TARGET_COUNT: usize = 3000;
pub const FETCH_DELAY_MS: u64 = 1000;
pub const TRIVIA_API_URL: &str = "https://the-trivia-api.com/v2/questions";
pub const OUTPUT_FILE: &str = "trivia_3000.csv";

/// Bucket for category labels the mapping does not recognize.
pub const DEFAULT_CATEGORY_ID: i64 = 3;

/// Audit value for rows produced without an explicit author.
pub const DEFAULT_CREATED_BY: &str = "system";
