use anyhow::{Result, bail};

use super::constants::MAX_PROBE_TIMEOUT_SECS;
use super::types::Config;

pub fn validate(config: &Config) -> Result<()> {
    for (key, value) in [
        ("c-compiler", &config.compilers.c_compiler),
        ("cpp-compiler", &config.compilers.cpp_compiler),
    ] {
        if !value.is_empty() && value.trim().is_empty() {
            bail!("Setting '{key}' is blank. Leave it empty to use the default compiler.");
        }
    }

    if config.probe.timeout_secs > MAX_PROBE_TIMEOUT_SECS {
        bail!(
            "Probe timeout of {}s exceeds the maximum of {}s",
            config.probe.timeout_secs,
            MAX_PROBE_TIMEOUT_SECS
        );
    }

    Ok(())
}
