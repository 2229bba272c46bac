
use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - restores the previous value on drop
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

/// Temp config directory wired through VU_CONFIG_DIR
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set(crate::CONFIG_DIR_ENV, temp.path().to_str().unwrap());
    (temp, guard)
}

/// Provide the two secrets validate() insists on
pub(crate) fn set_required_secrets() -> Vec<EnvGuard> {
    vec![
        EnvGuard::set("VU_DISCORD_BOT_TOKEN", "test-bot-token"),
        EnvGuard::set("VU_HYPIXEL_API_KEY", "test-hypixel-key"),
    ]
}
