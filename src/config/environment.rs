use anyhow::{Context, Result, anyhow};
use std::env;

use super::builder::ConfigBuilder;

pub fn apply_env_overrides(mut builder: ConfigBuilder) -> Result<ConfigBuilder> {
    if let Some(compiler) = env_string("CCRUN_C_COMPILER")? {
        builder = builder.with_compilers(|c| c.c_compiler = compiler);
    }

    if let Some(flags) = env_string("CCRUN_C_FLAGS")? {
        builder = builder.with_compilers(|c| c.c_flags = flags);
    }

    if let Some(compiler) = env_string("CCRUN_CPP_COMPILER")? {
        builder = builder.with_compilers(|c| c.cpp_compiler = compiler);
    }

    if let Some(flags) = env_string("CCRUN_CPP_FLAGS")? {
        builder = builder.with_compilers(|c| c.cpp_flags = flags);
    }

    if let Some(args) = env_string("CCRUN_RUN_ARGS")? {
        builder = builder.with_run(|run| run.args = args);
    }

    if let Some(external) = env_bool("CCRUN_EXTERNAL_TERMINAL")? {
        builder = builder.with_run(|run| run.external_terminal = external);
    }

    if let Some(timeout) = env_u64("CCRUN_PROBE_TIMEOUT_SECS")? {
        builder = builder.with_probe(|probe| probe.timeout_secs = timeout);
    }

    Ok(builder)
}

pub fn env_string(key: &str) -> Result<Option<String>> {
    match env::var(key) {
        Ok(val) => Ok(Some(val)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(anyhow!("{key} contains invalid UTF-8")),
    }
}

pub fn env_u64(key: &str) -> Result<Option<u64>> {
    if let Some(value) = env_string(key)? {
        let parsed = value
            .trim()
            .parse::<u64>()
            .with_context(|| format!("Failed to parse {key} as u64"))?;
        Ok(Some(parsed))
    } else {
        Ok(None)
    }
}

pub fn env_bool(key: &str) -> Result<Option<bool>> {
    match env_string(key)? {
        Some(value) => parse_bool(&value)
            .map(Some)
            .with_context(|| format!("Failed to parse {key} as a boolean")),
        None => Ok(None),
    }
}

pub fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(anyhow!("'{other}' is not one of true/false/yes/no/1/0")),
    }
}
