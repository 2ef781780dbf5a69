use std::sync::{Mutex, MutexGuard, OnceLock};
use tempfile::TempDir;

const ALL_VARS: [&str; 7] = [
    "CCRUN_C_COMPILER",
    "CCRUN_C_FLAGS",
    "CCRUN_CPP_COMPILER",
    "CCRUN_CPP_FLAGS",
    "CCRUN_RUN_ARGS",
    "CCRUN_EXTERNAL_TERMINAL",
    "CCRUN_PROBE_TIMEOUT_SECS",
];

/// Serializes every test that touches HOME or CCRUN_* across the crate.
pub(crate) fn env_lock<'a>() -> MutexGuard<'a, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub(crate) struct EnvGuard {
    saved: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    pub(crate) fn new(vars: &[(&str, Option<&str>)]) -> Self {
        let saved = vars
            .iter()
            .map(|(key, _)| (key.to_string(), std::env::var(key).ok()))
            .collect::<Vec<_>>();
        for (key, value) in vars {
            match value {
                Some(val) => unsafe { std::env::set_var(key, val) },
                None => unsafe { std::env::remove_var(key) },
            }
        }
        Self { saved }
    }

    /// Points HOME at `home` and clears every CCRUN_* variable before applying `vars`.
    pub(crate) fn isolated(home: &str, vars: &[(&str, Option<&str>)]) -> Self {
        let mut all: Vec<(&str, Option<&str>)> = vec![("HOME", Some(home))];
        all.extend(ALL_VARS.iter().map(|key| (*key, None)));
        all.extend_from_slice(vars);
        Self::new(&all)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in self.saved.iter().rev() {
            match value {
                Some(val) => unsafe { std::env::set_var(key, val) },
                None => unsafe { std::env::remove_var(key) },
            }
        }
    }
}

pub(crate) fn write_config(home: &TempDir, contents: &str) {
    let config_dir = home.path().join(".ccrun");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config"), contents).unwrap();
}

pub(crate) fn read_config(home: &TempDir) -> serde_json::Value {
    let persisted = std::fs::read_to_string(home.path().join(".ccrun").join("config")).unwrap();
    serde_json::from_str(&persisted).unwrap()
}
