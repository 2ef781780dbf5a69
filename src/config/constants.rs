pub const DEFAULT_C_COMPILER: &str = "gcc";
pub const DEFAULT_CPP_COMPILER: &str = "g++";
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = crate::probe::DEFAULT_LOOKUP_TIMEOUT_SECS;
pub const MAX_PROBE_TIMEOUT_SECS: u64 = 300;
pub const CONFIG_DIR: &str = ".ccrun";
pub const CONFIG_FILE: &str = "config";
