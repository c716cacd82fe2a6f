use async_trait::async_trait;
use snipit_core::types::{FileWriteRequest, ScreenPoint};
use std::path::PathBuf;

#[async_trait]
pub trait ClipboardSource: Send + Sync {
    /// Current clipboard text; `None` when the clipboard holds no text.
    async fn read_text(&self) -> anyhow::Result<Option<String>>;
}

/// Narrow capability: given a screen point, which folder is shown there.
#[async_trait]
pub trait DirectoryResolver: Send + Sync {
    async fn cursor_position(&self) -> anyhow::Result<ScreenPoint>;

    /// `Ok(None)` when nothing under `point` displays a folder.
    async fn directory_at(&self, point: ScreenPoint) -> anyhow::Result<Option<PathBuf>>;
}

#[async_trait]
pub trait FileSink: Send + Sync {
    /// Creates or truncates the target file; returns the path written.
    async fn write(&self, request: &FileWriteRequest) -> anyhow::Result<PathBuf>;
}
