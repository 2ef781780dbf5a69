use anyhow::{Context, Result, bail};
use log::debug;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use tokio::process::Command as TokioCommand;

use crate::probe::{CommandProbe, LookupRunner};

/// A terminal program that can open a new window running the built binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalTerminal {
    /// `cmd /C start`
    WindowsStart,
    /// Terminal.app driven through `osascript`
    MacTerminal,
    /// Debian-style `x-terminal-emulator` alternative
    XTerminalEmulator,
}

impl ExternalTerminal {
    pub fn detect() -> Self {
        if cfg!(windows) {
            ExternalTerminal::WindowsStart
        } else if cfg!(target_os = "macos") {
            ExternalTerminal::MacTerminal
        } else {
            ExternalTerminal::XTerminalEmulator
        }
    }

    pub fn program(self) -> &'static str {
        match self {
            ExternalTerminal::WindowsStart => "cmd",
            ExternalTerminal::MacTerminal => "osascript",
            ExternalTerminal::XTerminalEmulator => "x-terminal-emulator",
        }
    }

    pub fn launch_args(self, binary: &Path, args: &[String]) -> Vec<String> {
        let binary = binary.to_string_lossy().into_owned();
        match self {
            // Empty first argument is the window title `start` expects.
            ExternalTerminal::WindowsStart => {
                let mut launch: Vec<String> = ["/C", "start", "", "cmd", "/K"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect();
                launch.push(binary);
                launch.extend(args.iter().cloned());
                launch
            }
            ExternalTerminal::MacTerminal => {
                let line = shell_line(&binary, args);
                vec![
                    "-e".to_string(),
                    format!(
                        "tell application \"Terminal\" to do script \"{}\"",
                        applescript_escape(&line)
                    ),
                    "-e".to_string(),
                    "tell application \"Terminal\" to activate".to_string(),
                ]
            }
            ExternalTerminal::XTerminalEmulator => {
                let mut launch = vec![
                    "-e".to_string(),
                    "sh".to_string(),
                    "-c".to_string(),
                    r#""$0" "$@"; printf '\n[process exited with %s, press enter to close]' "$?"; read _"#
                        .to_string(),
                    binary,
                ];
                launch.extend(args.iter().cloned());
                launch
            }
        }
    }
}

/// A bare file name would be looked up on PATH; anchor it to the current directory.
pub fn invocable(binary: &Path) -> PathBuf {
    let bare = binary.parent().is_none_or(|dir| dir.as_os_str().is_empty());
    if binary.is_relative() && bare {
        Path::new(".").join(binary)
    } else {
        binary.to_path_buf()
    }
}

/// Run in the current terminal, inheriting stdio, and wait for it to finish.
pub async fn run_integrated(binary: &Path, args: &[String]) -> Result<ExitStatus> {
    let binary = invocable(binary);
    debug!("running {} {args:?}", binary.display());

    TokioCommand::new(&binary)
        .args(args)
        .status()
        .await
        .with_context(|| format!("Failed to run '{}'", binary.display()))
}

/// Open a new terminal window running the binary. Does not wait for it to exit.
pub async fn launch_external<R: LookupRunner>(
    terminal: ExternalTerminal,
    binary: &Path,
    args: &[String],
    probe: &CommandProbe<R>,
) -> Result<()> {
    if !probe.exists(terminal.program()).await {
        bail!(
            "No external terminal available: '{}' was not found. Run without --external instead.",
            terminal.program()
        );
    }

    let binary = invocable(binary);
    let launch = terminal.launch_args(&binary, args);
    debug!("launching {} {launch:?}", terminal.program());

    TokioCommand::new(terminal.program())
        .args(&launch)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("Failed to start external terminal '{}'", terminal.program()))?;

    Ok(())
}

pub fn shell_quote(word: &str) -> String {
    let safe = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "_-./=:,+@%".contains(c));
    if safe {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}

fn shell_line(binary: &str, args: &[String]) -> String {
    std::iter::once(binary)
        .chain(args.iter().map(String::as_str))
        .map(shell_quote)
        .collect::<Vec<_>>()
        .join(" ")
}

fn applescript_escape(text: &str) -> String {
    text.replace('\\', r"\\").replace('"', "\\\"")
}
