use anyhow::{Context, Result};
use dirs::home_dir;
use log::debug;
use std::{fs, path::Path};

use super::builder::ConfigBuilder;
use super::constants::{CONFIG_DIR, CONFIG_FILE};
use super::environment::apply_env_overrides;
use super::Config;
use super::types::{FileConfigV1, FileConfigV2, PersistedConfig, RawConfig};
use super::validation::validate;

impl Config {
    pub fn config_path() -> Result<std::path::PathBuf> {
        let mut path = home_dir().context("Could not determine home directory")?;
        path.push(CONFIG_DIR);
        path.push(CONFIG_FILE);
        Ok(path)
    }

    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Effective settings: defaults, then the settings file, then `CCRUN_*` overrides.
    pub fn load() -> Result<Self> {
        let builder = apply_env_overrides(Self::file_layer()?)?;

        let config = builder.build()?;
        validate(&config)?;
        Ok(config)
    }

    /// Defaults plus the settings file only. Environment overrides are skipped and
    /// nothing is validated, so a broken file can still be loaded and repaired.
    pub fn load_file_only() -> Result<Self> {
        Self::file_layer()?.build()
    }

    fn file_layer() -> Result<ConfigBuilder> {
        let path = Self::config_path()?;
        let builder = ConfigBuilder::new();

        if !path.exists() {
            return Ok(builder);
        }
        debug!("loading settings from {}", path.display());
        Self::apply_file(builder, &path)
    }

    pub fn save(&self) -> Result<()> {
        validate(self)?;

        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Unable to create config directory {}", parent.display())
            })?;
        }

        let payload = PersistedConfig::from(self);
        let json = serde_json::to_string_pretty(&payload)
            .context("Failed to serialize configuration to JSON")?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        validate(self)
    }

    fn apply_file(mut builder: ConfigBuilder, path: &Path) -> Result<ConfigBuilder> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed reading config at {}", path.display()))?;

        if contents.trim().is_empty() {
            return Ok(builder);
        }

        let raw: RawConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Failed parsing JSON config at {}", path.display()))?;

        builder = match raw {
            RawConfig::Nested(cfg) => cfg.apply(builder),
            RawConfig::Legacy(cfg) => cfg.apply(builder),
        };

        Ok(builder)
    }
}

impl FileConfigV1 {
    pub fn apply(self, builder: ConfigBuilder) -> ConfigBuilder {
        builder
            .with_compilers(|compilers| {
                if let Some(c) = self.c_compiler {
                    compilers.c_compiler = c;
                }
                if let Some(flags) = self.c_flags {
                    compilers.c_flags = flags;
                }
                if let Some(cpp) = self.cpp_compiler {
                    compilers.cpp_compiler = cpp;
                }
                if let Some(flags) = self.cpp_flags {
                    compilers.cpp_flags = flags;
                }
            })
            .with_run(|run| {
                if let Some(args) = self.run_args {
                    run.args = args;
                }
                if let Some(external) = self.run_in_external_terminal {
                    run.external_terminal = external;
                }
            })
    }
}

impl FileConfigV2 {
    pub fn apply(self, builder: ConfigBuilder) -> ConfigBuilder {
        let compilers = self.compilers;
        let builder = builder.with_compilers(|settings| {
            if let Some(c) = compilers.c {
                settings.c_compiler = c;
            }
            if let Some(flags) = compilers.c_flags {
                settings.c_flags = flags;
            }
            if let Some(cpp) = compilers.cpp {
                settings.cpp_compiler = cpp;
            }
            if let Some(flags) = compilers.cpp_flags {
                settings.cpp_flags = flags;
            }
        });

        let run = self.run.unwrap_or_default();
        let builder = builder.with_run(|settings| {
            if let Some(args) = run.args {
                settings.args = args;
            }
            if let Some(external) = run.external_terminal {
                settings.external_terminal = external;
            }
        });

        match self.probe {
            Some(probe) => builder.with_probe(|settings| {
                if let Some(timeout) = probe.timeout_secs {
                    settings.timeout_secs = timeout;
                }
            }),
            None => builder,
        }
    }
}
