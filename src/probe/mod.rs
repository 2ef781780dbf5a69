//! Answers "can this command be invoked right now?" for POSIX-like and
//! Windows-like platforms.
//!
//! Every failure mode collapses to `false`; callers can use [`CommandProbe::exists`]
//! directly in a conditional. [`CommandProbe::check`] returns the reason for a miss
//! when it is worth reporting.

mod posix;
mod runner;
mod types;
mod windows;

use log::debug;

pub use runner::{DEFAULT_LOOKUP_TIMEOUT_SECS, LookupRunner, SystemRunner};
pub use types::{LookupOutput, Platform, ProbeMiss};
pub use windows::has_forbidden_characters;

/// Stateless command-existence probe bound to one platform strategy.
#[derive(Debug, Clone)]
pub struct CommandProbe<R = SystemRunner> {
    platform: Platform,
    runner: R,
}

impl CommandProbe<SystemRunner> {
    pub fn new(platform: Platform) -> Self {
        Self::with_runner(platform, SystemRunner::default())
    }

    pub fn for_current_platform() -> Self {
        Self::new(Platform::current())
    }
}

impl<R: LookupRunner> CommandProbe<R> {
    pub fn with_runner(platform: Platform, runner: R) -> Self {
        Self { platform, runner }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub async fn check(&self, command: &str) -> Result<(), ProbeMiss> {
        match self.platform {
            Platform::Posix => posix::check(&self.runner, command).await,
            Platform::Windows => windows::check(&self.runner, command).await,
        }
    }

    pub async fn exists(&self, command: &str) -> bool {
        match self.check(command).await {
            Ok(()) => {
                debug!("'{command}' resolved ({})", self.platform);
                true
            }
            Err(miss) => {
                debug!("'{command}' {miss} ({})", self.platform);
                false
            }
        }
    }
}

/// One-shot probe with the default runner.
pub async fn exists(command: &str, platform: Platform) -> bool {
    CommandProbe::new(platform).exists(command).await
}
