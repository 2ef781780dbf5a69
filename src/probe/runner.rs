use std::process::Stdio;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use log::debug;
use tokio::process::Command as TokioCommand;

use super::types::LookupOutput;

pub const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 5;

/// Runs one short-lived lookup process and captures its stdout.
#[async_trait]
pub trait LookupRunner: Send + Sync {
    async fn run(&self, program: &str, args: &[&str]) -> Result<LookupOutput>;
}

/// Spawns real child processes. Stdin and stderr are detached; a child that
/// outlives the timeout is killed.
#[derive(Debug, Clone)]
pub struct SystemRunner {
    timeout: Option<Duration>,
}

impl SystemRunner {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }

    /// `0` disables the timeout.
    pub fn from_secs(secs: u64) -> Self {
        if secs == 0 {
            Self::new(None)
        } else {
            Self::new(Some(Duration::from_secs(secs)))
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::from_secs(DEFAULT_LOOKUP_TIMEOUT_SECS)
    }
}

#[async_trait]
impl LookupRunner for SystemRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<LookupOutput> {
        debug!("spawning lookup: {program} {args:?}");

        let child = TokioCommand::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("Failed to spawn lookup process '{program}'"))?;

        let pending = child.wait_with_output();
        let output = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, pending).await.map_err(|_| {
                anyhow!(
                    "Lookup process '{program}' timed out after {}ms",
                    limit.as_millis()
                )
            })?,
            None => pending.await,
        }
        .with_context(|| format!("Failed to wait for lookup process '{program}'"))?;

        Ok(LookupOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }
}
