// Windows-specific implementations.
//
// Kept behind `cfg(windows)` so the workspace builds cleanly on Linux.

#[path = "windows_explorer.rs"]
mod windows_explorer;

#[path = "windows_hook.rs"]
mod windows_hook;

use std::path::PathBuf;

use clipboard_win::{formats, get_clipboard_string, is_format_avail};
use snipit_core::types::ScreenPoint;
use snipit_engine::traits::{ClipboardSource, DirectoryResolver};

pub use windows_hook::KeyboardHook;

#[derive(Debug, Default)]
pub struct WindowsClipboard;

#[async_trait::async_trait]
impl ClipboardSource for WindowsClipboard {
    async fn read_text(&self) -> anyhow::Result<Option<String>> {
        // Images, file lists and friends are not text: nothing to write.
        if !is_format_avail(formats::CF_UNICODETEXT) {
            return Ok(None);
        }
        let text = get_clipboard_string().map_err(|e| anyhow::anyhow!("failed to read clipboard: {e}"))?;
        Ok(Some(text))
    }
}

/// Resolves the folder shown by the file-manager window under the cursor.
#[derive(Debug, Clone)]
pub struct WindowsDirectoryResolver {
    file_managers: Vec<String>,
}

impl WindowsDirectoryResolver {
    pub fn new(file_managers: Vec<String>) -> Self {
        Self { file_managers }
    }
}

impl Default for WindowsDirectoryResolver {
    fn default() -> Self {
        Self::new(vec!["explorer.exe".into()])
    }
}

#[async_trait::async_trait]
impl DirectoryResolver for WindowsDirectoryResolver {
    async fn cursor_position(&self) -> anyhow::Result<ScreenPoint> {
        windows_explorer::cursor_position()
    }

    async fn directory_at(&self, point: ScreenPoint) -> anyhow::Result<Option<PathBuf>> {
        // COM shell enumeration blocks; keep it off the async workers.
        let file_managers = self.file_managers.clone();
        tokio::task::spawn_blocking(move || windows_explorer::folder_at(point, &file_managers))
            .await
            .map_err(|e| anyhow::anyhow!("directory lookup task failed: {e}"))?
    }
}
