use log::debug;

use super::runner::LookupRunner;
use super::types::ProbeMiss;

/// `$1` keeps the candidate out of the script text, so spaces and shell
/// metacharacters in it are never interpreted. `--` makes a leading `-` part
/// of the name rather than an option.
const LOOKUP_SCRIPT: &str = r#"command -v -- "$1""#;

pub(super) async fn check<R>(runner: &R, command: &str) -> Result<(), ProbeMiss>
where
    R: LookupRunner + ?Sized,
{
    if !access::exists(command) {
        debug!("'{command}' is not a local path, asking the shell");
        return lookup(runner, command).await;
    }

    if access::readable_and_executable(command) {
        Ok(())
    } else {
        Err(ProbeMiss::NotExecutable)
    }
}

async fn lookup<R>(runner: &R, command: &str) -> Result<(), ProbeMiss>
where
    R: LookupRunner + ?Sized,
{
    let output = runner
        .run("sh", &["-c", LOOKUP_SCRIPT, "sh", command])
        .await
        .map_err(|err| {
            debug!("shell lookup for '{command}' failed: {err:#}");
            ProbeMiss::ProbeProcessFailure
        })?;

    if output.resolved() {
        Ok(())
    } else {
        Err(ProbeMiss::NotFound)
    }
}

#[cfg(unix)]
mod access {
    use rustix::fs::{Access, access};

    // A path with an interior NUL is rejected by `access` and counts as missing.
    pub(super) fn exists(path: &str) -> bool {
        access(path, Access::EXISTS).is_ok()
    }

    pub(super) fn readable_and_executable(path: &str) -> bool {
        access(path, Access::READ_OK | Access::EXEC_OK).is_ok()
    }
}

#[cfg(not(unix))]
mod access {
    use std::path::Path;

    pub(super) fn exists(path: &str) -> bool {
        !path.is_empty() && Path::new(path).exists()
    }

    // No execute bit to inspect here; a readable file is the best answer available.
    pub(super) fn readable_and_executable(path: &str) -> bool {
        std::fs::metadata(path).is_ok()
    }
}
