use anyhow::Result;
use super::types::{CompilerSettings, Config, ProbeSettings, RunSettings};

#[derive(Debug)]
pub struct ConfigBuilder {
    pub(super) compilers: CompilerSettings,
    pub(super) run: RunSettings,
    pub(super) probe: ProbeSettings,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            compilers: CompilerSettings::default(),
            run: RunSettings::default(),
            probe: ProbeSettings::default(),
        }
    }

    pub fn with_compilers<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut CompilerSettings),
    {
        update(&mut self.compilers);
        self
    }

    pub fn with_run<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut RunSettings),
    {
        update(&mut self.run);
        self
    }

    pub fn with_probe<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut ProbeSettings),
    {
        update(&mut self.probe);
        self
    }

    pub fn build(self) -> Result<Config> {
        Ok(Config {
            compilers: self.compilers,
            run: self.run,
            probe: self.probe,
        })
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
