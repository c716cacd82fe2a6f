use snipit_core::config::SnipitConfig;
use snipit_runtime::config_store::load_config;
use snipit_runtime::logging::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = load_config()?;
    init_logging(&cfg.log)?;
    log::info!("Starting SnipItGenerator...");

    run(cfg).await
}

#[cfg(windows)]
async fn run(cfg: SnipitConfig) -> anyhow::Result<()> {
    use snipit_engine::trigger::PasteTrigger;
    use snipit_platform::windows::{KeyboardHook, WindowsClipboard, WindowsDirectoryResolver};
    use snipit_runtime::runtime_pipeline::build_pipeline_from_config;
    use std::sync::Arc;

    let pipeline = build_pipeline_from_config(
        &cfg,
        Arc::new(WindowsClipboard),
        Arc::new(WindowsDirectoryResolver::new(
            cfg.file_manager_processes.clone(),
        )),
    );
    let trigger = PasteTrigger::new(Arc::new(pipeline), tokio::runtime::Handle::current());

    let hook = KeyboardHook::install(move || {
        let _ = trigger.fire();
    })?;

    println!("Monitoring for Ctrl+V... Press Ctrl+C to quit.");
    tokio::signal::ctrl_c().await?;

    log::info!("Shutting down");
    hook.stop();
    Ok(())
}

#[cfg(not(windows))]
async fn run(_cfg: SnipitConfig) -> anyhow::Result<()> {
    log::warn!("global paste capture needs Windows; nothing to do on this platform");
    Ok(())
}
