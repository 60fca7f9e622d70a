//! Running an analyzer with a per-attempt timeout, bounded retry and
//! cancellation.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::analyzer::{AnalysisError, Analyzer};
use crate::document::SelectedFile;
use crate::record::AnalysisRecord;
use crate::Config;

/// Longest pause between two attempts.
const MAX_BACKOFF: Duration = Duration::from_secs(30);

/// Progress events emitted while an analysis runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisEvent {
    Started {
        analyzer: String,
        file: String,
    },
    Retrying {
        /// 1-based number of the retry about to happen.
        attempt: u32,
        max_retries: u32,
        delay: Duration,
        reason: String,
    },
}

/// Analyze `file`, retrying transient failures.
///
/// 1. Rejects documents above `config.max_document_bytes`, if set
/// 2. Runs the analyzer under `config.analysis_timeout()`
/// 3. On a transient failure (service error, timeout): backs off and retries,
///    at most `config.max_retries` times
/// 4. Any other failure, or success, returns immediately
///
/// Cancelling `cancel` aborts the current attempt or backoff with
/// [`AnalysisError::Cancelled`].
pub async fn run_analysis(
    analyzer: &dyn Analyzer,
    file: &SelectedFile,
    config: &Config,
    progress: impl Fn(AnalysisEvent) + Send + Sync,
    cancel: CancellationToken,
) -> Result<AnalysisRecord, AnalysisError> {
    if let Some(limit) = config.max_document_bytes {
        if file.size_bytes > limit {
            return Err(AnalysisError::TooLarge {
                size: file.size_bytes,
                limit,
            });
        }
    }

    let timeout = config.analysis_timeout();
    let max_retries = config.max_retries;

    log::info!("{}: analyzing {}", analyzer.name(), file.name);
    progress(AnalysisEvent::Started {
        analyzer: analyzer.name().to_string(),
        file: file.name.clone(),
    });

    let mut attempt = 0;
    loop {
        let outcome = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(AnalysisError::Cancelled),
            result = tokio::time::timeout(timeout, analyzer.analyze(file)) => {
                result.unwrap_or(Err(AnalysisError::Timeout(timeout)))
            }
        };

        match outcome {
            Ok(record) => {
                log::info!(
                    "{}: {} scored {}",
                    analyzer.name(),
                    file.name,
                    record.overall_score
                );
                return Ok(record);
            }
            Err(err) if err.is_transient() && attempt < max_retries => {
                let delay = backoff_delay(attempt);
                log::info!(
                    "{}: {}, retry {}/{} after {:.1}s",
                    analyzer.name(),
                    err,
                    attempt + 1,
                    max_retries,
                    delay.as_secs_f64()
                );
                progress(AnalysisEvent::Retrying {
                    attempt: attempt + 1,
                    max_retries,
                    delay,
                    reason: err.to_string(),
                });

                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => return Err(AnalysisError::Cancelled),
                    _ = tokio::time::sleep(delay) => {}
                }
                attempt += 1;
            }
            Err(err) => {
                log::warn!("{}: analysis of {} failed: {}", analyzer.name(), file.name, err);
                return Err(err);
            }
        }
    }
}

/// Exponential backoff with jitter: 1s, 2s, 4s, 8s, 16s (+ up to 0.5s),
/// capped at 30s.
pub fn backoff_delay(attempt: u32) -> Duration {
    let base_ms = 1000u64 * (1 << attempt.min(4));
    let jitter_ms = fastrand::u64(0..500);
    Duration::from_millis(base_ms + jitter_ms).min(MAX_BACKOFF)
}
