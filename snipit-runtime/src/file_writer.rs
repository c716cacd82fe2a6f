use anyhow::Context;
use snipit_core::types::FileWriteRequest;
use snipit_engine::traits::FileSink;
use std::path::PathBuf;

/// Writes the snippet to disk, replacing any file of the same name.
#[derive(Debug, Default)]
pub struct FsFileWriter;

#[async_trait::async_trait]
impl FileSink for FsFileWriter {
    async fn write(&self, request: &FileWriteRequest) -> anyhow::Result<PathBuf> {
        let path = request.target_path();
        tokio::fs::write(&path, request.content.as_bytes())
            .await
            .with_context(|| format!("write file: {}", path.display()))?;
        Ok(path)
    }
}
