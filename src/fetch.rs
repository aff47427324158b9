use std::path::Path;

use async_trait::async_trait;
use rand::Rng;
use tracing::{error, info, warn};

use crate::category::CategoryMap;
use crate::config::FetchConfig;
use crate::csv_io;
use crate::error::Result;
use crate::transform;
use crate::types::{ApiQuestion, QuestionRecord};

/// Source of raw trivia question batches.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Fetches up to `limit` questions in one request.
    async fn fetch_batch(&self, limit: usize) -> Result<Vec<ApiQuestion>>;
}

/// Production source backed by the trivia HTTP API.
pub struct TriviaApiClient {
    client: reqwest::Client,
    endpoint: String,
}

impl TriviaApiClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl QuestionSource for TriviaApiClient {
    async fn fetch_batch(&self, limit: usize) -> Result<Vec<ApiQuestion>> {
        info!("HTTP GET request to: {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("limit", limit)])
            .send()
            .await?
            .error_for_status()?;
        let items = response.json::<Vec<ApiQuestion>>().await?;
        Ok(items)
    }
}

/// Fetches batches from `source` until `config.target_count` records have
/// accumulated, transforming each item through the category map and the
/// option shuffler. Appending stops mid-batch once the target is reached.
///
/// Any error ends the loop immediately, whether the request itself failed or
/// a fetched item was malformed; whatever accumulated so far is returned so
/// the caller can still write it out. The inter-request pause comes from
/// `config.delay()`, so tests run with a zero delay.
pub async fn collect_questions<S, R>(
    source: &S,
    categories: &CategoryMap,
    config: &FetchConfig,
    rng: &mut R,
) -> Vec<QuestionRecord>
where
    S: QuestionSource + ?Sized,
    R: Rng,
{
    let mut collected = Vec::with_capacity(config.target_count);

    'fetch: while collected.len() < config.target_count {
        let batch = match source.fetch_batch(config.batch_size).await {
            Ok(batch) => batch,
            Err(e) => {
                error!("Fetch loop aborted: {e}");
                println!("❌ Error fetching questions: {e}");
                break;
            }
        };

        for item in &batch {
            if collected.len() >= config.target_count {
                break;
            }
            match transform::to_record(item, categories, rng) {
                Ok(record) => collected.push(record),
                Err(e) => {
                    warn!("Fetch loop aborted on malformed item: {e}");
                    println!("❌ Error fetching questions: {e}");
                    break 'fetch;
                }
            }
        }

        println!("Progress: {}/{}", collected.len(), config.target_count);
        if collected.len() < config.target_count {
            tokio::time::sleep(config.delay()).await;
        }
    }

    collected
}

/// Runs the fetch pipeline end to end and reports the outcome. Rows
/// accumulated before a fetch error are still flushed to the output file.
pub async fn run_fetch(config: &FetchConfig) {
    println!(
        "Fetching {} questions from {}",
        config.target_count, config.endpoint
    );

    let source = TriviaApiClient::new(&config.endpoint);
    let categories = CategoryMap::builtin();
    let mut rng = rand::thread_rng();
    let records = collect_questions(&source, &categories, config, &mut rng).await;

    if records.is_empty() {
        println!("No questions were collected.");
        return;
    }

    match csv_io::write_questions(Path::new(&config.output_file), &records) {
        Ok(written) => {
            info!("Saved {} questions to {}", written, config.output_file);
            println!("✅ Saved {} questions to {}", written, config.output_file);
        }
        Err(e) => {
            error!("Failed to write {}: {e}", config.output_file);
            println!("❌ Error writing {}: {e}", config.output_file);
        }
    }
}
