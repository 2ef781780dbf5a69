//! Compile and run actions for a single source file.

use anyhow::{Result, bail};
use colored::*;
use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::exec::{OutputSink, stream_process};
use crate::probe::{CommandProbe, LookupRunner, Platform};
use crate::terminal::{self, ExternalTerminal};
use crate::toolchain::{BuildTarget, split_words};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Compile,
    Run,
    CompileRun,
    CompileWithFlags,
    RunWithArguments,
}

/// Asks the user for one line of input. `None` means cancelled or left empty.
pub trait Prompter: Send + Sync {
    fn ask(&self, prompt: &str, placeholder: &str) -> Result<Option<String>>;
}

#[derive(Debug, Clone)]
pub struct Request {
    pub action: Action,
    pub source: PathBuf,
    /// Extra compiler flags given up front; skips the flags prompt.
    pub flags: Option<String>,
    /// Program arguments given up front; skips the arguments prompt.
    pub args: Option<String>,
    /// Overrides the external-terminal setting for this run.
    pub external: Option<bool>,
}

impl Request {
    pub fn new(action: Action, source: impl Into<PathBuf>) -> Self {
        Self {
            action,
            source: source.into(),
            flags: None,
            args: None,
            external: None,
        }
    }
}

pub struct Workflow<'a, R> {
    config: &'a Config,
    probe: &'a CommandProbe<R>,
    prompter: &'a dyn Prompter,
    sink: &'a dyn OutputSink,
}

impl<'a, R: LookupRunner> Workflow<'a, R> {
    pub fn new(
        config: &'a Config,
        probe: &'a CommandProbe<R>,
        prompter: &'a dyn Prompter,
        sink: &'a dyn OutputSink,
    ) -> Self {
        Self {
            config,
            probe,
            prompter,
            sink,
        }
    }

    fn platform(&self) -> Platform {
        self.probe.platform()
    }

    pub async fn perform(&self, request: &Request) -> Result<()> {
        let target = BuildTarget::new(&request.source, self.platform());
        debug!("{:?} on {}", request.action, target.source.display());

        match request.action {
            Action::Compile => self.compile(&target, request, false, false).await,
            Action::CompileRun => self.compile(&target, request, false, true).await,
            Action::CompileWithFlags => self.compile(&target, request, true, false).await,
            Action::Run => self.run(&target.output, request, false).await,
            Action::RunWithArguments => self.run(&target.output, request, true).await,
        }
    }

    async fn compile(
        &self,
        target: &BuildTarget,
        request: &Request,
        with_flags: bool,
        then_run: bool,
    ) -> Result<()> {
        let language = target.language()?;
        let compiler = self.config.compilers.compiler_for(language);

        if !self.probe.exists(compiler).await {
            bail!(
                "{} compiler '{}' not found, try to change the path in settings! (eg. /usr/bin/gcc)",
                language,
                compiler
            );
        }

        let extra_flags = match &request.flags {
            Some(flags) => Some(flags.clone()),
            None if with_flags => self.prompter.ask("Flags", "-Wall -Wextra")?,
            None => None,
        };

        let args = target.compiler_args([
            self.config.compilers.flags_for(language),
            extra_flags.as_deref().unwrap_or_default(),
        ]);

        println!("\n┌─ COMPILING: {} {}", compiler, args.join(" "));
        println!("│");
        let status = stream_process(compiler, &args, self.sink).await?;
        println!("│");

        if !status.success() {
            println!("└─ {}", "Error compiling!".bold().red());
            match status.code() {
                Some(code) => bail!("{} exited with code {}", compiler, code),
                None => bail!("{} was terminated by signal", compiler),
            }
        }

        println!("└─ {}", "Compiled successfully!".bold().green());
        info!("built {}", target.output.display());

        if then_run {
            self.run(&target.output, request, false).await?;
        }
        Ok(())
    }

    async fn run(&self, output: &Path, request: &Request, with_args: bool) -> Result<()> {
        if !output.exists() {
            bail!("\"{}\" doesn't exist!", output.display());
        }

        let args_line = match &request.args {
            Some(args) => args.clone(),
            None if with_args => self.prompter.ask("Arguments", "arg")?.unwrap_or_default(),
            None => self.config.run.args.clone(),
        };
        let args: Vec<String> = split_words(&args_line).collect();

        if request.external.unwrap_or(self.config.run.external_terminal) {
            let terminal_kind = ExternalTerminal::detect();
            terminal::launch_external(terminal_kind, output, &args, self.probe).await?;
            println!(
                "🚀 Launched {} in a new {} window",
                output.display(),
                terminal_kind.program()
            );
            return Ok(());
        }

        println!("\n▶ {}", terminal::invocable(output).display());
        let status = terminal::run_integrated(output, &args).await?;

        if status.success() {
            Ok(())
        } else if let Some(code) = status.code() {
            bail!("{} exited with code {}", output.display(), code)
        } else {
            bail!("{} was terminated by signal", output.display())
        }
    }
}
