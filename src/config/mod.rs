//! Settings for the compile and run commands.
//!
//! Values are layered in this order, later sources winning:
//! - built-in defaults
//! - the JSON settings file (nested layout, or the flat editor-style keys)
//! - `CCRUN_*` environment variables
//!
//! Per-invocation CLI flags are applied on top by the command handlers.

mod builder;
mod constants;
mod defaults;
mod environment;
mod loader;
mod types;
mod validation;

pub use environment::parse_bool;
pub use types::{CompilerSettings, Config, ProbeSettings, RunSettings};

#[cfg(test)]
pub(crate) mod test_support;
#[cfg(test)]
mod tests;
