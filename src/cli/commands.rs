use anyhow::Result;
use std::process::ExitCode;

use crate::config::Config;
use crate::exec::ConsolePanel;
use crate::probe::{CommandProbe, Platform, SystemRunner};
use crate::workflow::{Action, Request, Workflow};

use super::args::{Cli, Command};
use super::config_cmd;
use super::probe_cmd;
use super::util::StdinPrompter;

pub(crate) async fn run(cli: Cli) -> Result<ExitCode> {
    let request = match cli.command {
        Command::Compile(args) => {
            let action = if args.with_flags {
                Action::CompileWithFlags
            } else {
                Action::Compile
            };
            let mut request = Request::new(action, args.file);
            request.flags = args.flags;
            request
        }
        Command::Run(args) => {
            let action = if args.with_args {
                Action::RunWithArguments
            } else {
                Action::Run
            };
            let mut request = Request::new(action, args.file);
            request.args = args.args;
            request.external = args.terminal.choice();
            request
        }
        Command::CompileRun(args) => {
            let mut request = Request::new(Action::CompileRun, args.file);
            request.flags = args.flags;
            request.args = args.args;
            request.external = args.terminal.choice();
            request
        }
        Command::Probe(args) => {
            let found = probe_cmd::handle_probe(args).await?;
            return Ok(if found {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            });
        }
        Command::Config(args) => {
            config_cmd::handle_config(args)?;
            return Ok(ExitCode::SUCCESS);
        }
    };

    let config = Config::load()?;
    perform(&request, &config).await?;
    Ok(ExitCode::SUCCESS)
}

async fn perform(request: &Request, config: &Config) -> Result<()> {
    let probe = CommandProbe::with_runner(
        Platform::current(),
        SystemRunner::from_secs(config.probe.timeout_secs),
    );
    let prompter = StdinPrompter;
    let panel = ConsolePanel;

    Workflow::new(config, &probe, &prompter, &panel)
        .perform(request)
        .await
}
