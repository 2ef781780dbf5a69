use super::constants::DEFAULT_PROBE_TIMEOUT_SECS;
use super::types::{CompilerSettings, ProbeSettings, RunSettings};

impl Default for CompilerSettings {
    fn default() -> Self {
        Self {
            c_compiler: String::new(),
            c_flags: String::new(),
            cpp_compiler: String::new(),
            cpp_flags: String::new(),
        }
    }
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            args: String::new(),
            external_terminal: false,
        }
    }
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_PROBE_TIMEOUT_SECS,
        }
    }
}
