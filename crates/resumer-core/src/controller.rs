//! The three-screen wizard: landing → upload → results → landing.

use std::fmt;

use thiserror::Error;

use crate::record::AnalysisRecord;

/// Which screen the wizard is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Landing,
    Upload,
    Results,
}

impl fmt::Display for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Landing => "landing",
            Self::Upload => "upload",
            Self::Results => "results",
        })
    }
}

/// Events that drive the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardEvent {
    Start,
    CompleteAnalysis,
    Reset,
}

impl fmt::Display for WizardEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "start",
            Self::CompleteAnalysis => "complete analysis",
            Self::Reset => "reset",
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot {event} from the {from} screen")]
pub struct TransitionError {
    pub from: AppState,
    pub event: WizardEvent,
}

/// Holds the current screen and the last analysis record.
///
/// The record is present exactly when the state is [`AppState::Results`].
/// Invalid transitions leave the controller untouched.
#[derive(Debug, Clone)]
pub struct Controller {
    state: AppState,
    record: Option<AnalysisRecord>,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller {
    pub fn new() -> Self {
        Self {
            state: AppState::Landing,
            record: None,
        }
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn record(&self) -> Option<&AnalysisRecord> {
        self.record.as_ref()
    }

    pub fn start(&mut self) -> Result<(), TransitionError> {
        self.expect(AppState::Landing, WizardEvent::Start)?;
        self.state = AppState::Upload;
        Ok(())
    }

    pub fn complete_analysis(&mut self, record: AnalysisRecord) -> Result<(), TransitionError> {
        self.expect(AppState::Upload, WizardEvent::CompleteAnalysis)?;
        self.record = Some(record);
        self.state = AppState::Results;
        Ok(())
    }

    /// Discard the record and go back to the landing screen.
    pub fn reset(&mut self) -> Result<Option<AnalysisRecord>, TransitionError> {
        self.expect(AppState::Results, WizardEvent::Reset)?;
        self.state = AppState::Landing;
        Ok(self.record.take())
    }

    fn expect(&self, required: AppState, event: WizardEvent) -> Result<(), TransitionError> {
        if self.state == required {
            Ok(())
        } else {
            Err(TransitionError {
                from: self.state,
                event,
            })
        }
    }
}
