use anyhow::{Context, Result};
use colored::*;
use log::warn;

use crate::config::Config;
use crate::probe::{CommandProbe, DEFAULT_LOOKUP_TIMEOUT_SECS, Platform, SystemRunner};

use super::args::ProbeArgs;

/// Prints the verdict and returns whether the command was found.
pub(crate) async fn handle_probe(args: ProbeArgs) -> Result<bool> {
    let platform = match args.platform.as_deref() {
        Some(raw) => raw
            .parse::<Platform>()
            .with_context(|| format!("Invalid --platform value '{raw}'"))?,
        None => Platform::current(),
    };
    let timeout = match args.timeout {
        Some(timeout) => timeout,
        None => configured_timeout(),
    };
    let probe = CommandProbe::with_runner(platform, SystemRunner::from_secs(timeout));

    match probe.check(&args.command).await {
        Ok(()) => {
            println!("✓ {} is available ({platform})", args.command.bold().green());
            Ok(true)
        }
        Err(miss) => {
            println!("✗ {} {miss} ({platform})", args.command.bold().red());
            Ok(false)
        }
    }
}

/// A broken settings file should not stop a lookup, so fall back to the default.
pub(crate) fn configured_timeout() -> u64 {
    match Config::load() {
        Ok(config) => config.probe.timeout_secs,
        Err(err) => {
            warn!("ignoring settings for this lookup: {err:#}");
            DEFAULT_LOOKUP_TIMEOUT_SECS
        }
    }
}
