use anyhow::{Result, bail};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::probe::Platform;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    C,
    Cpp,
}

impl Language {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "c" => Some(Language::C),
            "cpp" => Some(Language::Cpp),
            _ => None,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Language::C => "C",
            Language::Cpp => "C++",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A source file paired with the binary it compiles to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildTarget {
    pub source: PathBuf,
    pub output: PathBuf,
}

impl BuildTarget {
    pub fn new(source: impl Into<PathBuf>, platform: Platform) -> Self {
        let source = source.into();
        let output = output_path(&source, platform);
        Self { source, output }
    }

    pub fn language(&self) -> Result<Language> {
        match Language::from_path(&self.source) {
            Some(language) => Ok(language),
            None => bail!(
                "Unsupported source file '{}'. Only .c and .cpp files can be compiled.",
                self.source.display()
            ),
        }
    }

    /// `[source, "-o", output]` followed by every whitespace-separated flag.
    pub fn compiler_args<'a, I>(&self, flag_sets: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut args = vec![
            self.source.to_string_lossy().into_owned(),
            "-o".to_string(),
            self.output.to_string_lossy().into_owned(),
        ];
        args.extend(flag_sets.into_iter().flat_map(split_words));
        args
    }
}

/// `<dir>/<stem>`, with the platform's executable suffix.
pub fn output_path(source: &Path, platform: Platform) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = format!("{stem}{}", platform.executable_suffix());
    match source.parent() {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}

pub fn split_words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().map(str::to_string)
}
