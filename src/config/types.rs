use serde::{Deserialize, Serialize};

use crate::toolchain::Language;

use super::constants::{DEFAULT_C_COMPILER, DEFAULT_CPP_COMPILER};

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub compilers: CompilerSettings,
    pub run: RunSettings,
    pub probe: ProbeSettings,
}

/// Compiler commands may be left empty; [`CompilerSettings::compiler_for`] supplies the default.
#[derive(Debug, Clone, PartialEq)]
pub struct CompilerSettings {
    pub c_compiler: String,
    pub c_flags: String,
    pub cpp_compiler: String,
    pub cpp_flags: String,
}

impl CompilerSettings {
    pub fn compiler_for(&self, language: Language) -> &str {
        let (configured, fallback) = match language {
            Language::C => (&self.c_compiler, DEFAULT_C_COMPILER),
            Language::Cpp => (&self.cpp_compiler, DEFAULT_CPP_COMPILER),
        };
        if configured.is_empty() {
            fallback
        } else {
            configured
        }
    }

    pub fn flags_for(&self, language: Language) -> &str {
        match language {
            Language::C => &self.c_flags,
            Language::Cpp => &self.cpp_flags,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub args: String,
    pub external_terminal: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProbeSettings {
    /// `0` disables the lookup timeout.
    pub timeout_secs: u64,
}

// File configuration types
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum RawConfig {
    Nested(FileConfigV2),
    Legacy(FileConfigV1),
}

/// Flat layout using the editor extension's setting names.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub(super) struct FileConfigV1 {
    pub c_compiler: Option<String>,
    pub c_flags: Option<String>,
    pub cpp_compiler: Option<String>,
    pub cpp_flags: Option<String>,
    pub run_args: Option<String>,
    pub run_in_external_terminal: Option<bool>,
}

/// Every section is optional. Unknown top-level keys are rejected, which leaves
/// flat-layout files to [`FileConfigV1`].
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct FileConfigV2 {
    #[serde(default)]
    pub compilers: FileCompilerSettings,
    #[serde(default)]
    pub run: Option<FileRunSettings>,
    #[serde(default)]
    pub probe: Option<FileProbeSettings>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct FileCompilerSettings {
    pub c: Option<String>,
    pub c_flags: Option<String>,
    pub cpp: Option<String>,
    pub cpp_flags: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct FileRunSettings {
    pub args: Option<String>,
    pub external_terminal: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct FileProbeSettings {
    pub timeout_secs: Option<u64>,
}

// Serialization helpers
#[derive(Serialize)]
pub(super) struct PersistedConfig<'a> {
    pub compilers: PersistedCompilers<'a>,
    pub run: PersistedRun<'a>,
    pub probe: PersistedProbe,
}

#[derive(Serialize)]
pub(super) struct PersistedCompilers<'a> {
    pub c: &'a str,
    pub c_flags: &'a str,
    pub cpp: &'a str,
    pub cpp_flags: &'a str,
}

#[derive(Serialize)]
pub(super) struct PersistedRun<'a> {
    pub args: &'a str,
    pub external_terminal: bool,
}

#[derive(Serialize)]
pub(super) struct PersistedProbe {
    pub timeout_secs: u64,
}

impl<'a> From<&'a Config> for PersistedConfig<'a> {
    fn from(config: &'a Config) -> Self {
        PersistedConfig {
            compilers: PersistedCompilers {
                c: &config.compilers.c_compiler,
                c_flags: &config.compilers.c_flags,
                cpp: &config.compilers.cpp_compiler,
                cpp_flags: &config.compilers.cpp_flags,
            },
            run: PersistedRun {
                args: &config.run.args,
                external_terminal: config.run.external_terminal,
            },
            probe: PersistedProbe {
                timeout_secs: config.probe.timeout_secs,
            },
        }
    }
}
