use std::time::Duration;

use resumer_core::{AnalysisError, AnalysisRecord, SelectedFile};

/// Requests from the TUI to the backend task.
#[derive(Debug, Clone)]
pub enum BackendCommand {
    Analyze { file: SelectedFile },
}

/// Events flowing from the backend task to the TUI.
#[derive(Debug)]
pub enum BackendEvent {
    /// The analyzer accepted the document.
    AnalysisStarted { file: String },
    /// A transient failure; another attempt follows after `delay`.
    Retrying {
        attempt: u32,
        max_retries: u32,
        delay: Duration,
        reason: String,
    },
    AnalysisComplete { record: AnalysisRecord },
    AnalysisFailed { error: AnalysisError },
}
