use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A filename recovered from the first line of the clipboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedFilename {
    pub stem: String,
    pub extension: String,
}

impl ParsedFilename {
    pub fn new(stem: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            stem: stem.into(),
            extension: extension.into(),
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.{}", self.stem, self.extension)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NameSource {
    /// Stem and extension came from a filename comment on line 1.
    FirstLine,
    /// Line 1 named nothing; the extension was sniffed from the content.
    Sniffed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Everything needed to produce one file on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileWriteRequest {
    pub directory: PathBuf,
    pub name: ParsedFilename,
    pub content: String,
}

impl FileWriteRequest {
    pub fn new(directory: impl Into<PathBuf>, name: ParsedFilename, content: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            name,
            content: content.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn target_path(&self) -> PathBuf {
        self.directory.join(self.name.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_path_joins_stem_and_extension() {
        let req = FileWriteRequest::new("/tmp/out", ParsedFilename::new("greet", "py"), "print('hi')");
        assert_eq!(req.target_path(), PathBuf::from("/tmp/out").join("greet.py"));
    }

    #[test]
    fn file_name_keeps_inner_dots_in_stem() {
        assert_eq!(ParsedFilename::new("app.test", "ts").file_name(), "app.test.ts");
    }
}
