mod args;
mod commands;
mod config_cmd;
mod probe_cmd;
mod util;

pub use args::Cli;

/// `-v` lowers the default filter to debug; `RUST_LOG` still takes precedence.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}
