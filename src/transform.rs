use rand::seq::SliceRandom;
use rand::Rng;

use crate::category::CategoryMap;
use crate::constants::DEFAULT_CREATED_BY;
use crate::error::{IngestError, Result};
use crate::types::{ApiQuestion, QuestionRecord};

/// Transforms one fetched item into the canonical row shape: shuffles the
/// four options uniformly with the caller's rng and records the correct
/// answer's 1-based position in the shuffled order.
///
/// The rng is injected so tests can seed it; production passes
/// `rand::thread_rng()` and makes no reproducibility promise.
pub fn to_record<R: Rng>(
    item: &ApiQuestion,
    categories: &CategoryMap,
    rng: &mut R,
) -> Result<QuestionRecord> {
    if item.incorrect_answers.len() != 3 {
        return Err(IngestError::Api {
            message: format!(
                "expected 3 incorrect answers, got {}",
                item.incorrect_answers.len()
            ),
        });
    }

    let mut options: Vec<String> = item.incorrect_answers.clone();
    options.push(item.correct_answer.clone());
    options.shuffle(rng);

    // First match wins if the API ever repeats an option text.
    let correct_answer = options
        .iter()
        .position(|option| option == &item.correct_answer)
        .expect("shuffled options always contain the correct answer")
        as i64
        + 1;

    let mut options = options.into_iter();
    Ok(QuestionRecord {
        question: item.question.text.clone(),
        option_1: options.next().unwrap_or_default(),
        option_2: options.next().unwrap_or_default(),
        option_3: options.next().unwrap_or_default(),
        option_4: options.next().unwrap_or_default(),
        correct_answer,
        category_id: Some(categories.lookup(&item.category)),
        display_date: None,
        created_by: DEFAULT_CREATED_BY.to_string(),
        updated_by: None,
    })
}
