pub mod config_store;
pub mod defaults;
pub mod file_writer;
pub mod logging;
pub mod runtime_pipeline;
