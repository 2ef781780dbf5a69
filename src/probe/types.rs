use anyhow::anyhow;
use std::fmt;

/// Which command-resolution strategy to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Posix,
    Windows,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Posix
        }
    }

    pub fn executable_suffix(self) -> &'static str {
        match self {
            Platform::Posix => "",
            Platform::Windows => ".exe",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Posix => write!(f, "posix"),
            Platform::Windows => write!(f, "windows"),
        }
    }
}

impl std::str::FromStr for Platform {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "posix" | "unix" | "linux" | "macos" => Ok(Platform::Posix),
            "windows" | "win32" => Ok(Platform::Windows),
            other => Err(anyhow!("Unknown platform '{other}' (expected posix or windows)")),
        }
    }
}

/// Why a probe answered "no". Never surfaced as an error; only used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeMiss {
    NotFound,
    NotExecutable,
    InvalidCharacters,
    ProbeProcessFailure,
}

impl fmt::Display for ProbeMiss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ProbeMiss::NotFound => "not found on the execution path",
            ProbeMiss::NotExecutable => "exists but is not executable by the current user",
            ProbeMiss::InvalidCharacters => "contains characters that are not allowed in a command",
            ProbeMiss::ProbeProcessFailure => "lookup process failed to run",
        };
        f.write_str(text)
    }
}

/// Captured result of a lookup subprocess.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LookupOutput {
    pub success: bool,
    pub stdout: String,
}

impl LookupOutput {
    /// A lookup only counts when it exited cleanly and printed something.
    pub fn resolved(&self) -> bool {
        self.success && !self.stdout.trim().is_empty()
    }
}
