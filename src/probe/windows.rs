use log::debug;

use super::runner::LookupRunner;
use super::types::ProbeMiss;

pub(super) async fn check<R>(runner: &R, command: &str) -> Result<(), ProbeMiss>
where
    R: LookupRunner + ?Sized,
{
    if has_forbidden_characters(command) {
        return Err(ProbeMiss::InvalidCharacters);
    }

    let output = runner.run("where", &[command]).await.map_err(|err| {
        debug!("where lookup for '{command}' failed: {err:#}");
        ProbeMiss::ProbeProcessFailure
    })?;

    if output.resolved() {
        Ok(())
    } else {
        Err(ProbeMiss::NotFound)
    }
}

/// Control characters and `< > : " | ? *` are reserved in Windows command syntax.
pub fn has_forbidden_characters(command: &str) -> bool {
    command
        .chars()
        .any(|c| matches!(c, '\u{0}'..='\u{1f}' | '<' | '>' | ':' | '"' | '|' | '?' | '*'))
}
