//! Runtime settings
//!
//! Settings come from three layers, later ones winning:
//!
//! 1. built-in defaults ([`Settings::default`])
//! 2. an optional TOML file (`--config`), where every field may be omitted
//! 3. command-line flags ([`Cli`])
//!
//! ```toml
//! interval_ms = 750
//! language = "java"
//!
//! [queue]
//! capacity = 6
//! seed = [1, 2, 3]
//! ```

use crate::error::{DsvizError, Result};
use crate::snippet::Language;
use crate::structures::{linked_list, queue, vector};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Structure shown when the UI opens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum StructureKind {
    #[default]
    LinkedList,
    Queue,
    Vector,
}

#[derive(Parser, Debug, Default)]
#[command(author, version, about)]
pub struct Cli {
    /// TOML settings file
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Milliseconds between animation steps
    #[arg(long = "interval-ms", short = 'i')]
    pub interval_ms: Option<u64>,

    /// Queue capacity
    #[arg(long)]
    pub capacity: Option<usize>,

    /// Language of the "current state" snippet
    #[arg(long, short = 'l', value_enum)]
    pub language: Option<Language>,

    /// Structure to open first
    #[arg(long, short = 's', value_enum)]
    pub structure: Option<StructureKind>,

    /// Write logs to this file (the terminal is taken by the UI)
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListSettings {
    pub seed: Vec<i64>,
}

impl Default for ListSettings {
    fn default() -> Self {
        ListSettings {
            seed: linked_list::DEFAULT_SEED.to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueSettings {
    pub seed: Vec<i64>,
    pub capacity: usize,
}

impl Default for QueueSettings {
    fn default() -> Self {
        QueueSettings {
            seed: queue::DEFAULT_SEED.to_vec(),
            capacity: queue::DEFAULT_CAPACITY,
        }
    }
}

/// `capacity` is only the starting capacity; the vector grows past it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorSettings {
    pub seed: Vec<i64>,
    pub capacity: usize,
}

impl Default for VectorSettings {
    fn default() -> Self {
        VectorSettings {
            seed: vector::DEFAULT_SEED.to_vec(),
            capacity: vector::DEFAULT_CAPACITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub interval_ms: u64,
    pub language: Language,
    pub structure: StructureKind,
    pub log_file: Option<PathBuf>,
    pub linked_list: ListSettings,
    pub queue: QueueSettings,
    pub vector: VectorSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            interval_ms: 1000,
            language: Language::Cpp,
            structure: StructureKind::LinkedList,
            log_file: None,
            linked_list: ListSettings::default(),
            queue: QueueSettings::default(),
            vector: VectorSettings::default(),
        }
    }
}

impl Settings {
    /// Parse settings from TOML text; missing fields keep their defaults
    pub fn from_toml(text: &str, path: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|source| DsvizError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| DsvizError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text, path)
    }

    /// Defaults, then the `--config` file, then flags; validated
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut settings = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        settings.apply_cli(cli);
        settings.validate()?;
        Ok(settings)
    }

    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(ms) = cli.interval_ms {
            self.interval_ms = ms;
        }
        if let Some(capacity) = cli.capacity {
            self.queue.capacity = capacity;
        }
        if let Some(language) = cli.language {
            self.language = language;
        }
        if let Some(structure) = cli.structure {
            self.structure = structure;
        }
        if let Some(path) = &cli.log_file {
            self.log_file = Some(path.clone());
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.interval_ms == 0 {
            return Err(DsvizError::InvalidSetting {
                field: "interval_ms",
                reason: "must be greater than 0".to_string(),
            });
        }
        if self.queue.capacity == 0 {
            return Err(DsvizError::InvalidSetting {
                field: "queue.capacity",
                reason: "must be greater than 0".to_string(),
            });
        }
        if self.queue.seed.len() > self.queue.capacity {
            return Err(DsvizError::InvalidSetting {
                field: "queue.seed",
                reason: format!(
                    "{} values do not fit a capacity of {}",
                    self.queue.seed.len(),
                    self.queue.capacity
                ),
            });
        }
        if self.vector.seed.len() > self.vector.capacity {
            return Err(DsvizError::InvalidSetting {
                field: "vector.seed",
                reason: format!(
                    "{} values exceed the initial capacity of {}",
                    self.vector.seed.len(),
                    self.vector.capacity
                ),
            });
        }
        Ok(())
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}
