use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FallbackReason {
    /// No folder window under the cursor, or the lookup failed.
    Unresolved,
    /// The cursor resolved to a directory files must not be dropped into.
    Disallowed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DirectorySource {
    CursorWindow,
    Fallback(FallbackReason),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettledDirectory {
    pub path: PathBuf,
    pub source: DirectorySource,
}

/// What to do when the cursor is not over a folder window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnresolvedPolicy {
    #[default]
    UseFallback,
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryPolicy {
    fallback: PathBuf,
    disallowed: Vec<PathBuf>,
    unresolved: UnresolvedPolicy,
}

impl DirectoryPolicy {
    pub fn new(fallback: impl Into<PathBuf>) -> Self {
        Self {
            fallback: fallback.into(),
            disallowed: Vec::new(),
            unresolved: UnresolvedPolicy::default(),
        }
    }

    pub fn with_disallowed(mut self, disallowed: impl IntoIterator<Item = PathBuf>) -> Self {
        self.disallowed = disallowed.into_iter().collect();
        self
    }

    pub fn with_unresolved(mut self, unresolved: UnresolvedPolicy) -> Self {
        self.unresolved = unresolved;
        self
    }

    pub fn fallback(&self) -> &Path {
        &self.fallback
    }

    pub fn is_disallowed(&self, path: &Path) -> bool {
        let candidate = normalize(path);
        self.disallowed.iter().any(|d| normalize(d) == candidate)
    }

    /// Turns the resolver's answer into the directory the file goes to.
    ///
    /// Returns `None` only when an unresolved cursor directory should skip the
    /// write instead of falling back.
    pub fn settle(&self, resolved: Option<PathBuf>) -> Option<SettledDirectory> {
        match resolved {
            Some(path) if self.is_disallowed(&path) => Some(self.fallback_for(FallbackReason::Disallowed)),
            Some(path) => Some(SettledDirectory {
                path,
                source: DirectorySource::CursorWindow,
            }),
            None => match self.unresolved {
                UnresolvedPolicy::UseFallback => Some(self.fallback_for(FallbackReason::Unresolved)),
                UnresolvedPolicy::Skip => None,
            },
        }
    }

    fn fallback_for(&self, reason: FallbackReason) -> SettledDirectory {
        SettledDirectory {
            path: self.fallback.clone(),
            source: DirectorySource::Fallback(reason),
        }
    }
}

// Windows paths compare case-insensitively and with either separator.
fn normalize(path: &Path) -> String {
    path.to_string_lossy()
        .replace('/', "\\")
        .trim_end_matches('\\')
        .to_lowercase()
}
