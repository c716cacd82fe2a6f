use serde::{Deserialize, Serialize};
use snipit_core::directory::DirectorySource;
use snipit_core::error::PasteError;
use snipit_core::types::{FileWriteRequest, NameSource};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PasteStage {
    ReadingClipboard,
    Naming,
    Resolving,
    Writing,
    Done,
    Skipped,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasteOutcome {
    pub stage: PasteStage,
    pub name_source: Option<NameSource>,
    pub directory_source: Option<DirectorySource>,
    pub request: Option<FileWriteRequest>,
    pub written: Option<PathBuf>,

    // Skip and failure reason; also set when the run recovered from a
    // resolver error by falling back.
    #[serde(skip)]
    pub error: Option<PasteError>,
    pub elapsed_ms: u64,
}

impl PasteOutcome {
    pub fn new() -> Self {
        Self {
            stage: PasteStage::ReadingClipboard,
            name_source: None,
            directory_source: None,
            request: None,
            written: None,
            error: None,
            elapsed_ms: 0,
        }
    }

    pub fn skipped(mut self, reason: PasteError) -> Self {
        self.stage = PasteStage::Skipped;
        self.error = Some(reason);
        self
    }

    pub fn failed(mut self, reason: PasteError) -> Self {
        self.stage = PasteStage::Failed;
        self.error = Some(reason);
        self
    }

    pub fn is_done(&self) -> bool {
        self.stage == PasteStage::Done
    }

    /// One-line summary for the log.
    pub fn summary(&self) -> String {
        match (&self.stage, &self.written, &self.error) {
            (PasteStage::Done, Some(path), _) => format!(
                "File created: {} ({:?}, {:?}, {}ms)",
                path.display(),
                self.name_source,
                self.directory_source,
                self.elapsed_ms
            ),
            (stage, _, Some(err)) => format!("Paste {:?}: {err} ({}ms)", stage, self.elapsed_ms),
            (stage, _, None) => format!("Paste {:?} ({}ms)", stage, self.elapsed_ms),
        }
    }
}

impl Default for PasteOutcome {
    fn default() -> Self {
        Self::new()
    }
}

pub fn ms(d: Duration) -> u64 {
    d.as_millis().try_into().unwrap_or(u64::MAX)
}
