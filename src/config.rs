//! Server configuration
//!
//! Loaded from an optional TOML file. Every field has a default, so an
//! empty file and a missing `--config` flag behave the same.

use crate::todo::{DEFAULT_DUE_SOON_DAYS, SUGGESTED_CATEGORIES};
use anyhow::{Context, Result, ensure};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Days ahead a due date counts as "due soon"
    pub due_soon_days: i64,
    /// Category suggestions offered when adding todos
    pub categories: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            due_soon_days: DEFAULT_DUE_SOON_DAYS,
            categories: SUGGESTED_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Config {
    /// Load from `path`, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Parse and validate a TOML document
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        ensure!(
            (1..=365).contains(&config.due_soon_days),
            "due_soon_days must be between 1 and 365, got {}",
            config.due_soon_days
        );
        Ok(config)
    }

    pub fn soon_window(&self) -> Duration {
        Duration::days(self.due_soon_days)
    }
}
