//! Optional TOML config file at `<config_dir>/resumer/config.toml`.
//!
//! ```toml
//! [analysis]
//! timeout_secs = 30
//! max_retries = 2
//! stub_delay_ms = 3000
//! max_document_bytes = 10485760
//!
//! [ui]
//! tick_rate_ms = 100
//! log_file = "/tmp/resumer.log"
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub analysis: AnalysisSection,
    pub ui: UiSection,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisSection {
    pub timeout_secs: Option<u64>,
    pub max_retries: Option<u32>,
    pub stub_delay_ms: Option<u64>,
    pub max_document_bytes: Option<u64>,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct UiSection {
    pub tick_rate_ms: Option<u64>,
    pub log_file: Option<PathBuf>,
}

/// Default config file location.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("resumer").join("config.toml"))
}

/// Load the config file. A missing file yields the defaults; a file that
/// exists but does not parse is an error.
pub fn load(path: &Path) -> anyhow::Result<FileConfig> {
    if !path.exists() {
        return Ok(FileConfig::default());
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing config file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load(&dir.path().join("config.toml")).unwrap();
        assert_eq!(cfg, FileConfig::default());
    }

    #[test]
    fn partial_file_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[analysis]\ntimeout_secs = 5\n\n[ui]\ntick_rate_ms = 50\n").unwrap();
        let cfg = load(&path).unwrap();
        assert_eq!(cfg.analysis.timeout_secs, Some(5));
        assert_eq!(cfg.analysis.max_retries, None);
        assert_eq!(cfg.ui.tick_rate_ms, Some(50));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[analysis]\ntimeout_seconds = 5\n").unwrap();
        let err = load(&path).unwrap_err();
        assert!(err.to_string().contains("parsing config file"));
    }
}
