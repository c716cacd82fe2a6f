
#[cfg(windows)]
pub mod windows;
