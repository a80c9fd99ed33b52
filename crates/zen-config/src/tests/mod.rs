mod edge_cases;

use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

const OVERRIDE_VARS: [&str; 9] = [
    "ZENCLI_GITHUBAUTHTOKEN",
    "ZENCLI_REPOOWNER",
    "ZENCLI_REPONAME",
    "ZENCLI_GITHUB_API_URL",
    "ZENCLI_ZENHUBAUTHTOKEN",
    "ZENCLI_ZENHUB_API_URL",
    "ZENCLI_LOG_LEVEL",
    "ZENCLI_LOG_COLORED",
    "ZENCLI_LOG_FILE",
];

/// Temp config directory exported through ZENCLI_CONFIG_DIR, with every
/// override variable cleared for the lifetime of the returned guards.
pub(crate) fn setup_config_dir() -> (TempDir, Vec<EnvGuard>) {
    let temp = TempDir::new().unwrap();
    let mut guards = vec![EnvGuard::set(
        "ZENCLI_CONFIG_DIR",
        temp.path().to_str().unwrap(),
    )];
    guards.extend(OVERRIDE_VARS.iter().map(|key| EnvGuard::remove(key)));
    (temp, guards)
}

/// Set the four variables a real run needs.
pub(crate) fn set_credentials() -> Vec<EnvGuard> {
    vec![
        EnvGuard::set("ZENCLI_GITHUBAUTHTOKEN", "gh-token"),
        EnvGuard::set("ZENCLI_ZENHUBAUTHTOKEN", "zh-token"),
        EnvGuard::set("ZENCLI_REPOOWNER", "eltorocorp"),
        EnvGuard::set("ZENCLI_REPONAME", "zencli"),
    ]
}
