use std::path::{Path, PathBuf};

use resumer_core::document::has_accepted_extension;

/// A single entry in the file picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    /// PDF or Word file, by extension.
    pub is_document: bool,
}

/// What activating the entry under the cursor did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome {
    /// Moved into a directory.
    Entered,
    /// A file was chosen; the picker should close.
    Chosen(PathBuf),
    Nothing,
}

/// State for the file picker overlay on the upload screen.
#[derive(Debug, Clone)]
pub struct FilePickerState {
    /// Current directory being browsed.
    pub current_dir: PathBuf,
    /// Entries in the current directory (dirs first, then files).
    pub entries: Vec<FileEntry>,
    pub cursor: usize,
}

impl FilePickerState {
    pub fn new(dir: PathBuf) -> Self {
        let mut state = Self {
            current_dir: dir,
            entries: Vec::new(),
            cursor: 0,
        };
        state.refresh_entries();
        state
    }

    /// Start in the process working directory.
    pub fn in_current_dir() -> Self {
        Self::new(std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }

    /// Refresh the entries list from the current directory.
    pub fn refresh_entries(&mut self) {
        let mut entries = Vec::new();

        if let Some(parent) = self.current_dir.parent() {
            entries.push(FileEntry {
                name: "..".to_string(),
                path: parent.to_path_buf(),
                is_dir: true,
                is_document: false,
            });
        }

        match std::fs::read_dir(&self.current_dir) {
            Ok(read_dir) => {
                let mut dirs = Vec::new();
                let mut files = Vec::new();

                for entry in read_dir.flatten() {
                    let path = entry.path();
                    let name = entry.file_name().to_string_lossy().to_string();

                    // Skip hidden files/dirs
                    if name.starts_with('.') {
                        continue;
                    }

                    if path.is_dir() {
                        dirs.push(FileEntry {
                            name,
                            path,
                            is_dir: true,
                            is_document: false,
                        });
                    } else {
                        let is_document = has_accepted_extension(&path);
                        files.push(FileEntry {
                            name,
                            path,
                            is_dir: false,
                            is_document,
                        });
                    }
                }

                dirs.sort_by_key(|e| e.name.to_lowercase());
                files.sort_by_key(|e| e.name.to_lowercase());

                entries.extend(dirs);
                entries.extend(files);
            }
            Err(e) => {
                tracing::warn!("cannot list {}: {}", self.current_dir.display(), e);
            }
        }

        self.entries = entries;
        self.cursor = 0;
    }

    pub fn move_down(&mut self, by: usize) {
        let max = self.entries.len().saturating_sub(1);
        self.cursor = (self.cursor + by).min(max);
    }

    pub fn move_up(&mut self, by: usize) {
        self.cursor = self.cursor.saturating_sub(by);
    }

    pub fn go_bottom(&mut self) {
        self.cursor = self.entries.len().saturating_sub(1);
    }

    /// Enter the directory under the cursor, or choose the file there.
    pub fn activate(&mut self) -> PickerOutcome {
        let Some(entry) = self.entries.get(self.cursor) else {
            return PickerOutcome::Nothing;
        };
        if entry.is_dir {
            self.current_dir = entry.path.clone();
            self.refresh_entries();
            PickerOutcome::Entered
        } else {
            PickerOutcome::Chosen(entry.path.clone())
        }
    }

    pub fn dir(&self) -> &Path {
        &self.current_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("Archive")).unwrap();
        std::fs::create_dir(dir.path().join(".hidden")).unwrap();
        std::fs::write(dir.path().join("resume.pdf"), b"%PDF").unwrap();
        std::fs::write(dir.path().join("Notes.txt"), b"hi").unwrap();
        std::fs::write(dir.path().join("cover.DOCX"), b"PK").unwrap();
        std::fs::write(dir.path().join("Archive").join("old.doc"), b"").unwrap();
        dir
    }

    #[test]
    fn lists_dirs_first_then_files_sorted() {
        let dir = fixture();
        let picker = FilePickerState::new(dir.path().to_path_buf());
        let names: Vec<&str> = picker.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["..", "Archive", "cover.DOCX", "Notes.txt", "resume.pdf"]);

        let docs: Vec<&str> = picker
            .entries
            .iter()
            .filter(|e| e.is_document)
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(docs, vec!["cover.DOCX", "resume.pdf"]);
    }

    #[test]
    fn activate_enters_directories_and_chooses_files() {
        let dir = fixture();
        let mut picker = FilePickerState::new(dir.path().to_path_buf());

        picker.move_down(1);
        assert_eq!(picker.activate(), PickerOutcome::Entered);
        assert_eq!(picker.dir(), dir.path().join("Archive"));
        assert_eq!(picker.cursor, 0);

        picker.go_bottom();
        assert_eq!(
            picker.activate(),
            PickerOutcome::Chosen(dir.path().join("Archive").join("old.doc"))
        );
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let dir = fixture();
        let mut picker = FilePickerState::new(dir.path().to_path_buf());
        picker.move_down(100);
        assert_eq!(picker.cursor, picker.entries.len() - 1);
        picker.move_up(100);
        assert_eq!(picker.cursor, 0);
    }
}
