//! The analysis boundary.
//!
//! An [`Analyzer`] turns a selected document into an [`AnalysisRecord`].
//! Real engines are fallible and slow; [`run_analysis`](crate::run_analysis)
//! wraps any analyzer with a timeout, retry and cancellation.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::document::SelectedFile;
use crate::record::{AnalysisRecord, SchemaError};

/// Failures reported across the analysis boundary.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("the document could not be read: {0}")]
    Unreadable(String),
    #[error("the document content is not supported: {0}")]
    UnsupportedContent(String),
    #[error("the document is {size} bytes, the limit is {limit} bytes")]
    TooLarge { size: u64, limit: u64 },
    #[error("analysis service unavailable: {0}")]
    Transient(String),
    #[error("analysis timed out after {:.0}s", .0.as_secs_f64())]
    Timeout(Duration),
    #[error("analysis cancelled")]
    Cancelled,
    #[error("analysis returned an invalid result: {0}")]
    InvalidPayload(#[from] SchemaError),
}

impl AnalysisError {
    /// Whether another attempt may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Transient(_) | Self::Timeout(_))
    }

    /// Short heading for the user-facing notification.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Unreadable(_) => "Unreadable document",
            Self::UnsupportedContent(_) => "Unsupported document",
            Self::TooLarge { .. } => "File too large",
            Self::Transient(_) => "Analysis unavailable",
            Self::Timeout(_) => "Analysis timed out",
            Self::Cancelled => "Analysis cancelled",
            Self::InvalidPayload(_) => "Analysis failed",
        }
    }
}

/// Something that can analyze a resume.
///
/// Object safe so the binary can hold an `Arc<dyn Analyzer>` and swap the
/// stand-in for a real engine without touching the UI.
#[async_trait]
pub trait Analyzer: Send + Sync {
    fn name(&self) -> &str;

    async fn analyze(&self, file: &SelectedFile) -> Result<AnalysisRecord, AnalysisError>;
}

const SAMPLE_ANALYSIS: &str = include_str!("../data/sample_analysis.json");

/// The reference analysis returned by [`StubAnalyzer`].
pub fn sample_record() -> Result<AnalysisRecord, SchemaError> {
    AnalysisRecord::from_json(SAMPLE_ANALYSIS)
}

/// Stand-in analyzer: ignores the document and returns the reference
/// analysis after a fixed delay.
#[derive(Debug, Clone)]
pub struct StubAnalyzer {
    delay: Duration,
}

impl StubAnalyzer {
    pub const DEFAULT_DELAY: Duration = Duration::from_secs(3);

    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for StubAnalyzer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

#[async_trait]
impl Analyzer for StubAnalyzer {
    fn name(&self) -> &str {
        "stub"
    }

    async fn analyze(&self, _file: &SelectedFile) -> Result<AnalysisRecord, AnalysisError> {
        tokio::time::sleep(self.delay).await;
        Ok(sample_record()?)
    }
}
