use thiserror::Error;

/// Why a paste event did not (or did not directly) produce a file.
///
/// Every variant is recovered inside the pipeline; none of them ends the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasteError {
    #[error("clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    #[error("clipboard holds no text")]
    ClipboardEmpty,

    #[error("first line does not name a file")]
    NoFileName,

    #[error("no content signature matched")]
    NoSignature,

    #[error("directory under cursor unresolved: {0}")]
    DirectoryUnresolved(String),

    #[error("failed to write file: {0}")]
    WriteFailed(String),
}
