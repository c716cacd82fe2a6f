use snipit_core::config::SnipitConfig;
use snipit_core::directory::DirectoryPolicy;
use std::path::PathBuf;

pub const CONFIG_ENV_VAR: &str = "SNIPIT_CONFIG";

/// The user's desktop; home, then the working directory, when there is none.
pub fn default_fallback_directory() -> PathBuf {
    dirs::desktop_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn directory_policy(cfg: &SnipitConfig) -> DirectoryPolicy {
    let fallback = cfg
        .fallback_directory
        .clone()
        .unwrap_or_else(default_fallback_directory);

    DirectoryPolicy::new(fallback)
        .with_disallowed(cfg.disallowed_directories.iter().cloned())
        .with_unresolved(cfg.unresolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_fallback_wins() {
        let mut cfg = SnipitConfig::default();
        cfg.fallback_directory = Some(PathBuf::from("/srv/drops"));
        assert_eq!(directory_policy(&cfg).fallback(), std::path::Path::new("/srv/drops"));
    }

    #[test]
    fn default_policy_rejects_system32() {
        let policy = directory_policy(&SnipitConfig::default());
        assert!(policy.is_disallowed(std::path::Path::new(r"C:\Windows\System32")));
        assert!(!policy.fallback().as_os_str().is_empty());
    }
}
