//! Documents chosen by the user and the declared media type check.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Upper bound shown to the user. Only enforced when configured
/// (see [`Config::max_document_bytes`](crate::Config::max_document_bytes)).
pub const ADVERTISED_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// File name extensions offered by the picker.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["pdf", "doc", "docx"];

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("invalid file type: {declared:?} is not a PDF or Word document")]
    InvalidFileType { declared: String },
    #[error("could not open {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not a regular file", .0.display())]
    NotAFile(PathBuf),
}

/// The media types a resume may be uploaded as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Pdf,
    Msword,
    Docx,
}

impl MediaType {
    pub const ALL: [MediaType; 3] = [Self::Pdf, Self::Msword, Self::Docx];

    pub fn from_mime(declared: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_mime() == declared)
    }

    pub fn as_mime(self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Msword => "application/msword",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Msword => "DOC",
            Self::Docx => "DOCX",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_mime())
    }
}

/// A document as reported by the selection mechanism, not yet checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub name: String,
    pub path: Option<PathBuf>,
    pub size_bytes: u64,
    /// Content type claimed for the file. Never verified against its bytes.
    pub declared_type: String,
}

impl CandidateFile {
    pub fn new(name: impl Into<String>, size_bytes: u64, declared_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
            size_bytes,
            declared_type: declared_type.into(),
        }
    }

    /// Describe a file on disk. The declared type comes from its extension,
    /// the same way a browser file input reports it.
    pub fn from_path(path: &Path) -> Result<Self, DocumentError> {
        let metadata = std::fs::metadata(path).map_err(|source| DocumentError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        if !metadata.is_file() {
            return Err(DocumentError::NotAFile(path.to_path_buf()));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        let declared_type = mime_guess::from_path(path)
            .first_raw()
            .unwrap_or_default()
            .to_string();

        Ok(Self {
            name,
            path: Some(path.to_path_buf()),
            size_bytes: metadata.len(),
            declared_type,
        })
    }
}

/// A document that passed the media type check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub path: Option<PathBuf>,
    pub size_bytes: u64,
    pub media_type: MediaType,
}

impl SelectedFile {
    pub fn size_mb(&self) -> f64 {
        self.size_bytes as f64 / 1024.0 / 1024.0
    }

    /// Size as shown under the file name, e.g. `0.48 MB`.
    pub fn display_size(&self) -> String {
        format!("{:.2} MB", self.size_mb())
    }
}

impl TryFrom<CandidateFile> for SelectedFile {
    type Error = DocumentError;

    fn try_from(candidate: CandidateFile) -> Result<Self, Self::Error> {
        let media_type = MediaType::from_mime(&candidate.declared_type).ok_or_else(|| {
            DocumentError::InvalidFileType {
                declared: candidate.declared_type.clone(),
            }
        })?;
        Ok(Self {
            name: candidate.name,
            path: candidate.path,
            size_bytes: candidate.size_bytes,
            media_type,
        })
    }
}

/// Whether a path has one of the extensions the picker highlights.
pub fn has_accepted_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| ACCEPTED_EXTENSIONS.iter().any(|a| e.eq_ignore_ascii_case(a)))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_set_matches_exact_mime_strings() {
        assert_eq!(MediaType::from_mime("application/pdf"), Some(MediaType::Pdf));
        assert_eq!(
            MediaType::from_mime("application/msword"),
            Some(MediaType::Msword)
        );
        assert_eq!(
            MediaType::from_mime(
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            ),
            Some(MediaType::Docx)
        );
        assert_eq!(MediaType::from_mime("text/plain"), None);
        assert_eq!(MediaType::from_mime("APPLICATION/PDF"), None);
        assert_eq!(MediaType::from_mime(""), None);
    }

    #[test]
    fn display_size_in_megabytes() {
        let file = SelectedFile::try_from(CandidateFile::new(
            "resume.pdf",
            500_000,
            "application/pdf",
        ))
        .unwrap();
        assert_eq!(file.display_size(), "0.48 MB");
    }

    #[test]
    fn candidate_with_unknown_type_is_rejected() {
        let err = SelectedFile::try_from(CandidateFile::new("photo.png", 10, "image/png"))
            .unwrap_err();
        assert!(matches!(err, DocumentError::InvalidFileType { ref declared } if declared == "image/png"));
    }

    #[test]
    fn from_path_declares_type_from_extension() {
        let dir = tempfile::tempdir().unwrap();

        let pdf = dir.path().join("cv.pdf");
        std::fs::write(&pdf, b"%PDF-1.4").unwrap();
        let candidate = CandidateFile::from_path(&pdf).unwrap();
        assert_eq!(candidate.name, "cv.pdf");
        assert_eq!(candidate.size_bytes, 8);
        assert_eq!(candidate.declared_type, "application/pdf");

        let docx = dir.path().join("cv.docx");
        std::fs::write(&docx, b"PK").unwrap();
        let candidate = CandidateFile::from_path(&docx).unwrap();
        assert_eq!(candidate.declared_type, MediaType::Docx.as_mime());

        let doc = dir.path().join("cv.doc");
        std::fs::write(&doc, b"").unwrap();
        let candidate = CandidateFile::from_path(&doc).unwrap();
        assert_eq!(candidate.declared_type, MediaType::Msword.as_mime());
    }

    #[test]
    fn from_path_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.pdf");
        assert!(matches!(
            CandidateFile::from_path(&missing),
            Err(DocumentError::Unreadable { .. })
        ));
        assert!(matches!(
            CandidateFile::from_path(dir.path()),
            Err(DocumentError::NotAFile(_))
        ));
    }

    #[test]
    fn accepted_extensions_are_case_insensitive() {
        assert!(has_accepted_extension(Path::new("a/b/Resume.PDF")));
        assert!(has_accepted_extension(Path::new("cv.docx")));
        assert!(!has_accepted_extension(Path::new("cv.txt")));
        assert!(!has_accepted_extension(Path::new("pdf")));
    }
}
