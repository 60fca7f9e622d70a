use std::time::Duration;

pub mod analyzer;
pub mod controller;
pub mod document;
pub mod notify;
pub mod record;
pub mod runner;
pub mod score;
pub mod upload;

// Re-export for convenience
pub use analyzer::{sample_record, AnalysisError, Analyzer, StubAnalyzer};
pub use controller::{AppState, Controller, TransitionError, WizardEvent};
pub use document::{CandidateFile, DocumentError, MediaType, SelectedFile};
pub use notify::{Notification, NotificationKind};
pub use record::{AnalysisRecord, SchemaError, Section};
pub use runner::{run_analysis, AnalysisEvent};
pub use score::{Score, Tier};
pub use upload::{UploadError, UploadPhase, UploadSession};

/// Configuration for running analyses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Budget for a single analysis attempt.
    pub analysis_timeout_secs: u64,
    /// Extra attempts after a transient failure.
    pub max_retries: u32,
    /// How long the stand-in analyzer takes.
    pub stub_delay_ms: u64,
    /// Reject larger documents before analyzing. `None` only advertises the limit.
    pub max_document_bytes: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            analysis_timeout_secs: 30,
            max_retries: 2,
            stub_delay_ms: 3000,
            max_document_bytes: None,
        }
    }
}

impl Config {
    pub fn analysis_timeout(&self) -> Duration {
        Duration::from_secs(self.analysis_timeout_secs)
    }

    pub fn stub_delay(&self) -> Duration {
        Duration::from_millis(self.stub_delay_ms)
    }
}
