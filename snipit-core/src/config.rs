use crate::directory::UnresolvedPolicy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_FALLBACK_STEM: &str = "file";
pub const DEFAULT_LOG_FILE: &str = "SnipItGenerator.log";
pub const DEFAULT_FILE_MANAGERS: &[&str] = &["explorer.exe"];
pub const DEFAULT_DISALLOWED_DIRECTORIES: &[&str] = &[r"C:\Windows\System32", r"C:\Windows"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogMode {
    /// Start every run with an empty log.
    #[default]
    Truncate,
    Append,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub path: PathBuf,
    pub mode: LogMode,
    // `RUST_LOG` wins when set.
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_LOG_FILE),
            mode: LogMode::default(),
            level: "debug".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnipitConfig {
    /// `None` means the user's desktop, looked up at startup.
    pub fallback_directory: Option<PathBuf>,
    pub disallowed_directories: Vec<PathBuf>,
    /// Process image names whose windows can show a folder.
    pub file_manager_processes: Vec<String>,
    /// Stem used when the extension had to be sniffed.
    pub fallback_stem: String,
    pub unresolved: UnresolvedPolicy,
    pub log: LogSettings,
}

impl Default for SnipitConfig {
    fn default() -> Self {
        Self {
            fallback_directory: None,
            disallowed_directories: DEFAULT_DISALLOWED_DIRECTORIES
                .iter()
                .map(PathBuf::from)
                .collect(),
            file_manager_processes: DEFAULT_FILE_MANAGERS.iter().map(|s| s.to_string()).collect(),
            fallback_stem: DEFAULT_FALLBACK_STEM.into(),
            unresolved: UnresolvedPolicy::default(),
            log: LogSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg: SnipitConfig =
            serde_json::from_str(r#"{"fallback_stem":"snippet","log":{"mode":"append"}}"#).unwrap();
        assert_eq!(cfg.fallback_stem, "snippet");
        assert_eq!(cfg.log.mode, LogMode::Append);
        assert_eq!(cfg.log.path, PathBuf::from(DEFAULT_LOG_FILE));
        assert_eq!(cfg.file_manager_processes, vec!["explorer.exe".to_string()]);
        assert_eq!(cfg.unresolved, UnresolvedPolicy::UseFallback);
    }
}
