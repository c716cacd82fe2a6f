use snipit_core::config::SnipitConfig;
use snipit_engine::pipeline::{PipelineConfig, SnipitPipeline};
use snipit_engine::traits::{ClipboardSource, DirectoryResolver};
use std::sync::Arc;

use crate::defaults::directory_policy;
use crate::file_writer::FsFileWriter;

pub fn pipeline_config(cfg: &SnipitConfig) -> PipelineConfig {
    PipelineConfig {
        directory_policy: directory_policy(cfg),
        fallback_stem: cfg.fallback_stem.clone(),
    }
}

/// Wires the platform adapters to a pipeline that writes to the real filesystem.
pub fn build_pipeline_from_config(
    cfg: &SnipitConfig,
    clipboard: Arc<dyn ClipboardSource>,
    resolver: Arc<dyn DirectoryResolver>,
) -> SnipitPipeline {
    let pcfg = pipeline_config(cfg);
    log::debug!(
        "pipeline: fallback={} disallowed={} unresolved={:?}",
        pcfg.directory_policy.fallback().display(),
        cfg.disallowed_directories.len(),
        cfg.unresolved
    );
    SnipitPipeline::new(pcfg, clipboard, resolver, Arc::new(FsFileWriter))
}
