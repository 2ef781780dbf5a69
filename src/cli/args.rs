use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use super::commands;

/// Entry point for the `ccrun` command-line interface.
#[derive(Debug, Parser)]
#[command(
    name = "ccrun",
    about = "Compile and run single C/C++ source files",
    version,
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging of probes and spawned processes
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compile a .c or .cpp file next to its source.
    Compile(CompileArgs),
    /// Run the binary previously built from a source file.
    Run(RunArgs),
    /// Compile, then run the binary if compilation succeeded.
    CompileRun(CompileRunArgs),
    /// Check whether a command can be invoked on this machine.
    Probe(ProbeArgs),
    /// Show or change saved settings.
    Config(ConfigArgs),
}

#[derive(Debug, Args)]
pub struct CompileArgs {
    /// Source file (.c or .cpp)
    pub file: PathBuf,

    /// Extra compiler flags, appended after the configured ones
    #[arg(long, allow_hyphen_values = true)]
    pub flags: Option<String>,

    /// Prompt for extra compiler flags
    #[arg(short = 'f', long, conflicts_with = "flags")]
    pub with_flags: bool,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Source file whose binary should be run
    pub file: PathBuf,

    /// Arguments for the program (defaults to the run-args setting)
    #[arg(long, allow_hyphen_values = true)]
    pub args: Option<String>,

    /// Prompt for program arguments
    #[arg(short = 'a', long, conflicts_with = "args")]
    pub with_args: bool,

    #[command(flatten)]
    pub terminal: TerminalArgs,
}

#[derive(Debug, Args)]
pub struct CompileRunArgs {
    /// Source file (.c or .cpp)
    pub file: PathBuf,

    /// Extra compiler flags, appended after the configured ones
    #[arg(long, allow_hyphen_values = true)]
    pub flags: Option<String>,

    /// Arguments for the program (defaults to the run-args setting)
    #[arg(long, allow_hyphen_values = true)]
    pub args: Option<String>,

    #[command(flatten)]
    pub terminal: TerminalArgs,
}

#[derive(Debug, Args)]
pub struct TerminalArgs {
    /// Run in a new terminal window
    #[arg(long, conflicts_with = "integrated")]
    pub external: bool,

    /// Run in the current terminal
    #[arg(long)]
    pub integrated: bool,
}

impl TerminalArgs {
    /// `None` leaves the choice to the run-in-external-terminal setting.
    pub fn choice(&self) -> Option<bool> {
        match (self.external, self.integrated) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

#[derive(Debug, Args)]
pub struct ProbeArgs {
    /// Command name or path to look up
    pub command: String,

    /// Lookup strategy to use: posix or windows (defaults to this machine's)
    #[arg(long)]
    pub platform: Option<String>,

    /// Lookup timeout in seconds, 0 for none (defaults to the probe setting)
    #[arg(long)]
    pub timeout: Option<u64>,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Set the C compiler (empty string restores the default, gcc)
    #[arg(long)]
    pub c_compiler: Option<String>,

    /// Set flags passed to every C compile
    #[arg(long, allow_hyphen_values = true)]
    pub c_flags: Option<String>,

    /// Set the C++ compiler (empty string restores the default, g++)
    #[arg(long)]
    pub cpp_compiler: Option<String>,

    /// Set flags passed to every C++ compile
    #[arg(long, allow_hyphen_values = true)]
    pub cpp_flags: Option<String>,

    /// Set default program arguments
    #[arg(long, allow_hyphen_values = true)]
    pub run_args: Option<String>,

    /// Run binaries in an external terminal (true/false)
    #[arg(long)]
    pub external_terminal: Option<String>,

    /// Set the command lookup timeout in seconds (0 disables it)
    #[arg(long)]
    pub probe_timeout: Option<u64>,
}

impl ConfigArgs {
    pub fn has_updates(&self) -> bool {
        self.c_compiler.is_some()
            || self.c_flags.is_some()
            || self.cpp_compiler.is_some()
            || self.cpp_flags.is_some()
            || self.run_args.is_some()
            || self.external_terminal.is_some()
            || self.probe_timeout.is_some()
    }
}

impl Cli {
    /// Settings are loaded per command, so `config` can repair a file the
    /// others would reject.
    pub async fn run(self) -> Result<ExitCode> {
        commands::run(self).await
    }
}
