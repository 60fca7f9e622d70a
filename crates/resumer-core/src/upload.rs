//! Upload session: the single selected document and the busy sub-state.

use thiserror::Error;

use crate::document::{CandidateFile, DocumentError, SelectedFile};

#[derive(Error, Debug)]
pub enum UploadError {
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error("no document selected")]
    NoSelection,
    #[error("an analysis is already running")]
    Busy,
}

/// Whether an analysis is in flight for this session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadPhase {
    #[default]
    Idle,
    Analyzing,
}

/// State behind the upload screen.
///
/// Holds at most one document. While [`UploadPhase::Analyzing`] every
/// mutating operation is refused with [`UploadError::Busy`], so a second
/// analysis can never be started for the same session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadSession {
    selected: Option<SelectedFile>,
    phase: UploadPhase,
}

impl UploadSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    pub fn phase(&self) -> UploadPhase {
        self.phase
    }

    pub fn is_busy(&self) -> bool {
        self.phase == UploadPhase::Analyzing
    }

    /// Whether confirming would start an analysis.
    pub fn can_analyze(&self) -> bool {
        self.selected.is_some() && !self.is_busy()
    }

    /// Replace the selection with `candidate` if its declared type is
    /// accepted. On rejection the previous selection is kept.
    pub fn select(&mut self, candidate: CandidateFile) -> Result<&SelectedFile, UploadError> {
        if self.is_busy() {
            return Err(UploadError::Busy);
        }
        let file = SelectedFile::try_from(candidate)?;
        Ok(&*self.selected.insert(file))
    }

    /// Clear the selection, returning what was removed.
    pub fn remove(&mut self) -> Result<Option<SelectedFile>, UploadError> {
        if self.is_busy() {
            return Err(UploadError::Busy);
        }
        Ok(self.selected.take())
    }

    /// Enter the busy sub-state and hand back the document to analyze.
    pub fn begin_analysis(&mut self) -> Result<SelectedFile, UploadError> {
        if self.is_busy() {
            return Err(UploadError::Busy);
        }
        let file = self.selected.clone().ok_or(UploadError::NoSelection)?;
        self.phase = UploadPhase::Analyzing;
        Ok(file)
    }

    /// Leave the busy sub-state. The selection is kept so a failed analysis
    /// can be retried without choosing the file again.
    pub fn finish_analysis(&mut self) {
        self.phase = UploadPhase::Idle;
    }
}
