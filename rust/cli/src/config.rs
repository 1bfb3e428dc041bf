//! Layered configuration: defaults, TOML file, environment, command line.
//!
//! The file is named by `PHHFORGE_CONFIG`. Environment overrides are
//! `PHHFORGE_BASE_PATH`, `PHHFORGE_FOLDERS` (comma-separated),
//! `PHHFORGE_MAX_FILES` and `PHHFORGE_FORMAT`. Every resolved value remembers
//! which layer it came from.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;

pub const DEFAULT_FOLDERS: [&str; 5] = ["30", "40", "50", "70", "90"];

/// Layout of the generated dataset file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One pretty-printed JSON array
    #[default]
    Json,
    /// One JSON object per line
    Jsonl,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<OutputFormat> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "jsonl" => Some(OutputFormat::Jsonl),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub base_path: String,
    pub target_folders: Vec<String>,
    pub max_files_per_folder: Option<usize>,
    pub output_format: OutputFormat,
    /// Player to generate for; `None` means every seated player
    pub perspective: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_path: ".".into(),
            target_folders: DEFAULT_FOLDERS.iter().map(|f| f.to_string()).collect(),
            max_files_per_folder: None,
            output_format: OutputFormat::Json,
            perspective: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Cli,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigSources {
    pub base_path: ValueSource,
    pub target_folders: ValueSource,
    pub max_files_per_folder: ValueSource,
    pub output_format: ValueSource,
    pub perspective: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            base_path: ValueSource::Default,
            target_folders: ValueSource::Default,
            max_files_per_folder: ValueSource::Default,
            output_format: ValueSource::Default,
            perspective: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

/// Values given on the command line; `None` leaves the lower layers in place.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base_path: Option<String>,
    pub folders: Option<Vec<String>>,
    pub max_files: Option<usize>,
    pub format: Option<OutputFormat>,
    pub player: Option<String>,
}

impl ConfigResolved {
    /// Applies the command-line layer and re-validates.
    pub fn with_overrides(mut self, overrides: Overrides) -> Result<Self, ConfigError> {
        let Overrides {
            base_path,
            folders,
            max_files,
            format,
            player,
        } = overrides;
        if let Some(v) = base_path {
            self.config.base_path = v;
            self.sources.base_path = ValueSource::Cli;
        }
        if let Some(v) = folders {
            self.config.target_folders = v;
            self.sources.target_folders = ValueSource::Cli;
        }
        if let Some(v) = max_files {
            self.config.max_files_per_folder = Some(v);
            self.sources.max_files_per_folder = ValueSource::Cli;
        }
        if let Some(v) = format {
            self.config.output_format = v;
            self.sources.output_format = ValueSource::Cli;
        }
        if let Some(v) = player {
            self.config.perspective = Some(v);
            self.sources.perspective = ValueSource::Cli;
        }
        validate(&self.config)?;
        Ok(self)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{0}")]
    Invalid(String),
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("PHHFORGE_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(&path)?;
        let f: FileConfig = toml::from_str(&s)?;
        tracing::debug!(path, "loaded config file");
        if let Some(v) = f.base_path {
            cfg.base_path = v;
            sources.base_path = ValueSource::File;
        }
        if let Some(v) = f.target_folders {
            cfg.target_folders = v;
            sources.target_folders = ValueSource::File;
        }
        if let Some(v) = f.max_files_per_folder {
            cfg.max_files_per_folder = Some(v);
            sources.max_files_per_folder = ValueSource::File;
        }
        if let Some(v) = f.output_format {
            cfg.output_format = v;
            sources.output_format = ValueSource::File;
        }
        if let Some(v) = f.perspective {
            cfg.perspective = Some(v);
            sources.perspective = ValueSource::File;
        }
    }

    if let Ok(base) = std::env::var("PHHFORGE_BASE_PATH")
        && !base.is_empty()
    {
        cfg.base_path = base;
        sources.base_path = ValueSource::Env;
    }
    if let Ok(folders) = std::env::var("PHHFORGE_FOLDERS")
        && !folders.is_empty()
    {
        cfg.target_folders = split_list(&folders);
        sources.target_folders = ValueSource::Env;
    }
    if let Ok(max) = std::env::var("PHHFORGE_MAX_FILES")
        && !max.is_empty()
    {
        cfg.max_files_per_folder = Some(
            max.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid max files: {}", max)))?,
        );
        sources.max_files_per_folder = ValueSource::Env;
    }
    if let Ok(format) = std::env::var("PHHFORGE_FORMAT")
        && !format.is_empty()
    {
        cfg.output_format = OutputFormat::parse(&format)
            .ok_or_else(|| ConfigError::Invalid(format!("Invalid output format: {}", format)))?;
        sources.output_format = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    base_path: Option<String>,
    #[serde(default)]
    target_folders: Option<Vec<String>>,
    #[serde(default)]
    max_files_per_folder: Option<usize>,
    #[serde(default)]
    output_format: Option<OutputFormat>,
    #[serde(default)]
    perspective: Option<String>,
}

fn split_list(s: &str) -> Vec<String> {
    s.split(',').map(|f| f.trim().to_string()).collect()
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.target_folders.is_empty() {
        return Err(ConfigError::Invalid(
            "Invalid configuration: at least one target folder is required".into(),
        ));
    }
    if cfg.target_folders.iter().any(|f| f.trim().is_empty()) {
        return Err(ConfigError::Invalid(
            "Invalid configuration: folder names must be non-empty".into(),
        ));
    }
    if cfg.max_files_per_folder == Some(0) {
        return Err(ConfigError::Invalid(
            "Invalid configuration: max_files_per_folder must be >0".into(),
        ));
    }
    Ok(())
}
