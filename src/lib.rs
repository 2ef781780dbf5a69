//! Compile a single C or C++ file, check that its compiler can be found, and
//! run the result.

pub mod cli;
pub mod config;
pub mod exec;
pub mod probe;
pub mod terminal;
pub mod toolchain;
pub mod workflow;
