//! chunk-book configuration management.

use crate::text::DEFAULT_SOURCE;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_INPUT_PATH: &str = "/tmp/domo_playbook_content.txt";
const DEFAULT_OUTPUT_PATH: &str = "book_chunks.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkerConfig {
    /// Plain-text book to chunk
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,

    /// Where the JSON chunk file is written
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Source name stored in each chunk's metadata
    #[serde(default = "default_source")]
    pub source: String,
}

fn default_input_path() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT_PATH)
}

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_PATH)
}

fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            output_path: default_output_path(),
            source: default_source(),
        }
    }
}

impl ChunkerConfig {
    /// Get the config file path: ~/.config/cli-programs/chunk-book.toml
    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home
            .join(".config")
            .join("cli-programs")
            .join("chunk-book.toml"))
    }

    /// Load config from the default location, returning defaults if it doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from a specific file, returning defaults if it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: ChunkerConfig = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
