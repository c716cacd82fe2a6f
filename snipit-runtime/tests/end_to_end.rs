use snipit_core::config::SnipitConfig;
use snipit_core::directory::{DirectorySource, FallbackReason, UnresolvedPolicy};
use snipit_core::error::PasteError;
use snipit_engine::outcome::PasteStage;
use snipit_engine::pipeline::SnipitPipeline;
use snipit_platform::test::{FixedDirectoryResolver, MemoryFileSink, StaticClipboard};
use snipit_runtime::runtime_pipeline::{build_pipeline_from_config, pipeline_config};
use std::path::{Path, PathBuf};
use std::sync::Arc;

fn config_with_fallback(fallback: &Path) -> SnipitConfig {
    SnipitConfig {
        fallback_directory: Some(fallback.to_path_buf()),
        ..SnipitConfig::default()
    }
}

#[tokio::test]
async fn named_snippet_lands_in_folder_under_cursor() {
    let folder = tempfile::tempdir().unwrap();
    let desktop = tempfile::tempdir().unwrap();
    let content = "# greet.py\nprint('hello')\n";

    let pipeline = build_pipeline_from_config(
        &config_with_fallback(desktop.path()),
        StaticClipboard::new(content).boxed(),
        FixedDirectoryResolver::folder(folder.path()).boxed(),
    );
    let out = pipeline.run_once().await;

    assert_eq!(out.stage, PasteStage::Done);
    assert_eq!(out.directory_source, Some(DirectorySource::CursorWindow));
    let written = folder.path().join("greet.py");
    assert_eq!(out.written.as_deref(), Some(written.as_path()));
    assert_eq!(std::fs::read_to_string(written).unwrap(), content);
}

#[tokio::test]
async fn sniffed_snippet_falls_back_to_desktop() {
    let desktop = tempfile::tempdir().unwrap();
    let content = "#include <stdio.h>\nint main(void) { return 0; }\n";

    let pipeline = build_pipeline_from_config(
        &config_with_fallback(desktop.path()),
        StaticClipboard::new(content).boxed(),
        FixedDirectoryResolver::nowhere().boxed(),
    );
    let out = pipeline.run_once().await;

    assert_eq!(out.stage, PasteStage::Done);
    assert_eq!(
        out.directory_source,
        Some(DirectorySource::Fallback(FallbackReason::Unresolved))
    );
    assert_eq!(
        std::fs::read_to_string(desktop.path().join("file.c")).unwrap(),
        content
    );
}

#[tokio::test]
async fn pasting_twice_overwrites() {
    let folder = tempfile::tempdir().unwrap();
    let cfg = config_with_fallback(folder.path());

    for body in ["// notes.js\nlet a = 1;\n", "// notes.js\nlet a = 2;\n"] {
        let pipeline = build_pipeline_from_config(
            &cfg,
            StaticClipboard::new(body).boxed(),
            FixedDirectoryResolver::folder(folder.path()).boxed(),
        );
        assert!(pipeline.run_once().await.is_done());
    }

    assert_eq!(
        std::fs::read_to_string(folder.path().join("notes.js")).unwrap(),
        "// notes.js\nlet a = 2;\n"
    );
}

#[tokio::test]
async fn unrecognised_text_writes_nothing() {
    let desktop = tempfile::tempdir().unwrap();
    let pipeline = build_pipeline_from_config(
        &config_with_fallback(desktop.path()),
        StaticClipboard::new("just a sentence about lunch").boxed(),
        FixedDirectoryResolver::nowhere().boxed(),
    );
    let out = pipeline.run_once().await;

    assert_eq!(out.stage, PasteStage::Skipped);
    assert_eq!(std::fs::read_dir(desktop.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn skip_policy_writes_nothing_without_a_folder() {
    let desktop = tempfile::tempdir().unwrap();
    let cfg = SnipitConfig {
        unresolved: UnresolvedPolicy::Skip,
        ..config_with_fallback(desktop.path())
    };
    let pipeline = build_pipeline_from_config(
        &cfg,
        StaticClipboard::new("# tool.sh\necho hi\n").boxed(),
        FixedDirectoryResolver::nowhere().boxed(),
    );
    let out = pipeline.run_once().await;

    assert_eq!(out.stage, PasteStage::Skipped);
    assert_eq!(std::fs::read_dir(desktop.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn missing_target_directory_fails_cleanly() {
    let desktop = tempfile::tempdir().unwrap();
    let gone = desktop.path().join("deleted-folder");
    let pipeline = build_pipeline_from_config(
        &config_with_fallback(desktop.path()),
        StaticClipboard::new("# a.py\n").boxed(),
        FixedDirectoryResolver::folder(&gone).boxed(),
    );
    let out = pipeline.run_once().await;

    assert_eq!(out.stage, PasteStage::Failed);
    assert!(out.written.is_none());
}

#[tokio::test]
async fn configured_stem_and_fallback_reach_the_sink() {
    let cfg = SnipitConfig {
        fallback_directory: Some(PathBuf::from("/drops")),
        fallback_stem: "snippet".into(),
        ..SnipitConfig::default()
    };
    let sink = Arc::new(MemoryFileSink::default());
    let pipeline = SnipitPipeline::new(
        pipeline_config(&cfg),
        StaticClipboard::new("SELECT 1;").boxed(),
        FixedDirectoryResolver::nowhere().boxed(),
        sink.clone(),
    );
    assert_eq!(pipeline.config().fallback_stem, "snippet");
    assert_eq!(pipeline.config().directory_policy.fallback(), Path::new("/drops"));

    let out = pipeline.run_once().await;
    assert!(out.is_done());

    let written = sink.written.lock().unwrap();
    assert_eq!(written.len(), 1);
    assert_eq!(written[0].directory(), Path::new("/drops"));
    assert_eq!(written[0].name.file_name(), "snippet.sql");
    assert_eq!(written[0].content, "SELECT 1;");
}

#[tokio::test]
async fn empty_clipboard_is_skipped() {
    let sink = Arc::new(MemoryFileSink::default());
    let pipeline = SnipitPipeline::new(
        pipeline_config(&SnipitConfig::default()),
        StaticClipboard::empty().boxed(),
        FixedDirectoryResolver::folder("/anywhere").boxed(),
        sink.clone(),
    );

    let out = pipeline.run_once().await;
    assert_eq!(out.stage, PasteStage::Skipped);
    assert_eq!(out.error, Some(PasteError::ClipboardEmpty));
    assert!(sink.written.lock().unwrap().is_empty());
}
