use anyhow::{Context, Result};

use crate::config::{Config, parse_bool};
use crate::toolchain::Language;

use super::args::ConfigArgs;
use super::util::display_or;

/// Without setters, prints the effective settings. With setters, edits the file
/// layer only: `CCRUN_*` overrides are never persisted, and a file that fails
/// validation can be repaired as long as the result validates.
pub(crate) fn handle_config(args: ConfigArgs) -> Result<()> {
    if !args.has_updates() {
        return print_config(&Config::load()?);
    }

    let mut file_config = Config::load_file_only()?;
    apply_updates(&args, &mut file_config)?;
    file_config.save()?;

    println!(
        "✅ Configuration saved to {}",
        Config::config_path()?.display()
    );
    print_config(&file_config)
}

pub(crate) fn apply_updates(args: &ConfigArgs, config: &mut Config) -> Result<()> {
    if let Some(ref compiler) = args.c_compiler {
        config.compilers.c_compiler = compiler.trim().to_string();
    }

    if let Some(ref flags) = args.c_flags {
        config.compilers.c_flags = flags.clone();
    }

    if let Some(ref compiler) = args.cpp_compiler {
        config.compilers.cpp_compiler = compiler.trim().to_string();
    }

    if let Some(ref flags) = args.cpp_flags {
        config.compilers.cpp_flags = flags.clone();
    }

    if let Some(ref run_args) = args.run_args {
        config.run.args = run_args.clone();
    }

    if let Some(ref external) = args.external_terminal {
        config.run.external_terminal = parse_bool(external)
            .with_context(|| format!("Invalid --external-terminal value '{external}'"))?;
    }

    if let Some(timeout) = args.probe_timeout {
        config.probe.timeout_secs = timeout;
    }

    config.validate()
}

fn print_config(config: &Config) -> Result<()> {
    let compilers = &config.compilers;

    println!("📋 Current configuration:");
    println!(
        "   C Compiler: {}",
        display_or(
            &compilers.c_compiler,
            &format!("{} (default)", compilers.compiler_for(Language::C))
        )
    );
    println!("   C Flags: {}", display_or(&compilers.c_flags, "(none)"));
    println!(
        "   C++ Compiler: {}",
        display_or(
            &compilers.cpp_compiler,
            &format!("{} (default)", compilers.compiler_for(Language::Cpp))
        )
    );
    println!("   C++ Flags: {}", display_or(&compilers.cpp_flags, "(none)"));
    println!("   Run Args: {}", display_or(&config.run.args, "(none)"));
    println!(
        "   External Terminal: {}",
        if config.run.external_terminal { "yes" } else { "no" }
    );
    if config.probe.timeout_secs == 0 {
        println!("   Probe Timeout: none");
    } else {
        println!("   Probe Timeout: {}s", config.probe.timeout_secs);
    }
    println!("   Settings File: {}", Config::config_path()?.display());

    Ok(())
}
