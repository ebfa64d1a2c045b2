//! Configuration management
//!
//! Config stored at: ~/.config/podash/config.json

use podash_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default export URL of the factory's ledger sheet.
const DEFAULT_SHEET_URL: &str = "https://docs.google.com/spreadsheets/d/1XoV7020NTZk1kzqn3F2ks3gOVFJ5arr5NVgUdewWPNQ/export?format=csv&gid=1100244896";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// CSV export URL of the ledger sheet
    #[serde(default = "default_sheet_url")]
    pub sheet_url: String,

    /// Model used for insight generation
    #[serde(default = "default_model")]
    pub model: String,

    /// Gemini API key. Falls back to the GEMINI_API_KEY env var.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// HTTP timeout in seconds for fetch and insight calls
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_sheet_url() -> String {
    DEFAULT_SHEET_URL.to_string()
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet_url: default_sheet_url(),
            model: default_model(),
            api_key: None,
            output_format: default_output_format(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("podash");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load config from an explicit path (tests use a temp dir)
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    /// Save config to an explicit path
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Resolve the API key: config first, then environment.
    pub fn resolved_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .filter(|k| !k.is_empty())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Podash Configuration")?;
        writeln!(f, "====================")?;
        writeln!(f)?;
        writeln!(f, "Sheet URL:      {}", self.sheet_url)?;
        writeln!(f, "Model:          {}", self.model)?;
        writeln!(
            f,
            "API key:        {}",
            if self.api_key.is_some() {
                "(set)"
            } else {
                "(from env)"
            }
        )?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(f, "Timeout:        {}s", self.timeout_secs)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}
