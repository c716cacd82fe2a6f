use crate::outcome::{PasteOutcome, PasteStage, ms};
use crate::traits::{ClipboardSource, DirectoryResolver, FileSink};
use snipit_core::directory::{DirectoryPolicy, DirectorySource};
use snipit_core::error::PasteError;
use snipit_core::types::{FileWriteRequest, NameSource, ParsedFilename};
use snipit_core::{filename, sniffer};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub directory_policy: DirectoryPolicy,
    pub fallback_stem: String,
}

/// Clipboard -> name -> directory -> file, once per paste chord.
pub struct SnipitPipeline {
    cfg: PipelineConfig,
    clipboard: Arc<dyn ClipboardSource>,
    resolver: Arc<dyn DirectoryResolver>,
    sink: Arc<dyn FileSink>,
}

impl SnipitPipeline {
    pub fn new(
        cfg: PipelineConfig,
        clipboard: Arc<dyn ClipboardSource>,
        resolver: Arc<dyn DirectoryResolver>,
        sink: Arc<dyn FileSink>,
    ) -> Self {
        Self {
            cfg,
            clipboard,
            resolver,
            sink,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.cfg
    }

    /// Runs the pipeline for the current clipboard. Never fails: every problem
    /// ends up in the returned outcome and in the log.
    pub async fn run_once(&self) -> PasteOutcome {
        let t0 = Instant::now();
        let mut outcome = self.run_stages().await;
        outcome.elapsed_ms = ms(t0.elapsed());

        if outcome.stage == PasteStage::Failed {
            log::error!("{}", outcome.summary());
        } else {
            log::info!("{}", outcome.summary());
        }
        outcome
    }

    async fn run_stages(&self) -> PasteOutcome {
        let mut outcome = PasteOutcome::new();

        // 1) Clipboard
        let content = match self.clipboard.read_text().await {
            Ok(Some(text)) if !text.trim().is_empty() => text,
            Ok(_) => return outcome.skipped(PasteError::ClipboardEmpty),
            Err(e) => {
                log::warn!("clipboard read failed: {e:#}");
                return outcome.skipped(PasteError::ClipboardUnavailable(e.to_string()));
            }
        };

        // 2) Name
        outcome.stage = PasteStage::Naming;
        let Some((name, source)) = self.name_for(&content) else {
            return outcome.skipped(PasteError::NoSignature);
        };
        outcome.name_source = Some(source);

        // 3) Directory
        outcome.stage = PasteStage::Resolving;
        let resolved = self.resolve_directory().await;
        let unresolved = resolved.as_ref().err().cloned();
        let Some(settled) = self.cfg.directory_policy.settle(resolved.ok()) else {
            return outcome.skipped(
                unresolved.unwrap_or(PasteError::DirectoryUnresolved("no folder window".into())),
            );
        };
        if let DirectorySource::Fallback(reason) = settled.source {
            log::info!(
                "using fallback directory {} ({:?})",
                settled.path.display(),
                reason
            );
            outcome.error = unresolved;
        }
        outcome.directory_source = Some(settled.source);

        // 4) Write
        outcome.stage = PasteStage::Writing;
        let request = FileWriteRequest::new(settled.path, name, content);
        log::info!(
            "Creating file with name: {} in directory: {}",
            request.name.file_name(),
            request.directory.display()
        );
        let written = self.sink.write(&request).await;
        outcome.request = Some(request);

        match written {
            Ok(path) => {
                outcome.written = Some(path);
                outcome.stage = PasteStage::Done;
                outcome
            }
            Err(e) => outcome.failed(PasteError::WriteFailed(format!("{e:#}"))),
        }
    }

    /// Filename from the first line, else a sniffed extension on the fallback stem.
    pub fn name_for(&self, content: &str) -> Option<(ParsedFilename, NameSource)> {
        if let Some(name) = filename::parse(filename::first_line(content)) {
            log::info!("Comment line detected: {}", name.file_name());
            log::debug!(
                "Extension found in supported list: {}",
                sniffer::is_known_extension(&name.extension)
            );
            return Some((name, NameSource::FirstLine));
        }
        log::debug!("{}", PasteError::NoFileName);

        let extension = sniffer::detect(content)?;
        log::info!("Content signature matched: {extension}");
        Some((
            ParsedFilename::new(self.cfg.fallback_stem.clone(), extension),
            NameSource::Sniffed,
        ))
    }

    async fn resolve_directory(&self) -> Result<PathBuf, PasteError> {
        let point = self.resolver.cursor_position().await.map_err(|e| {
            log::error!("Error getting cursor position: {e:#}");
            PasteError::DirectoryUnresolved(e.to_string())
        })?;

        match self.resolver.directory_at(point).await {
            Ok(Some(dir)) => {
                log::debug!("cursor ({}, {}) is over {}", point.x, point.y, dir.display());
                Ok(dir)
            }
            Ok(None) => {
                log::debug!("no folder window under cursor ({}, {})", point.x, point.y);
                Err(PasteError::DirectoryUnresolved(format!(
                    "no folder window at ({}, {})",
                    point.x, point.y
                )))
            }
            Err(e) => {
                log::error!("Error getting directory from mouse cursor: {e:#}");
                Err(PasteError::DirectoryUnresolved(e.to_string()))
            }
        }
    }
}
