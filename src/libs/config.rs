//! User configuration.
//!
//! Stored as pretty-printed JSON in `config.json` inside the application data
//! directory. Every field has a default, so a missing file or a partial file
//! both load cleanly.
//!
//! ```rust,no_run
//! use taskly::libs::config::Config;
//! use taskly::libs::task::Priority;
//!
//! let mut config = Config::read()?;
//! config.default_priority = Priority::High;
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::messages::Message;
use super::task::{FilterMode, Priority, SortMode};
use crate::libs::controller::AppState;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Priority given to new tasks when none is chosen.
    pub default_priority: Priority,

    /// Filter a session starts with.
    pub default_filter: FilterMode,

    /// Sort order a session starts with.
    pub default_sort: SortMode,
}

impl Config {
    /// Reads `config.json`, falling back to defaults when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = Self::path()?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file = File::create(Self::path()?)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    pub fn path() -> Result<PathBuf> {
        DataStorage::new().get_path(CONFIG_FILE_NAME)
    }

    /// Session state seeded from the configured defaults.
    pub fn initial_state(&self) -> AppState {
        AppState::new(self.default_filter, self.default_sort)
    }

    /// Interactive setup, starting from the current configuration.
    pub fn init() -> Result<Self> {
        let current = Config::read()?;
        let theme = ColorfulTheme::default();

        let default_priority = Priority::ALL[Select::with_theme(&theme)
            .with_prompt(Message::PromptDefaultPriority.to_string())
            .items(&Priority::ALL)
            .default(position(&Priority::ALL, &current.default_priority))
            .interact()?];

        let default_filter = FilterMode::ALL[Select::with_theme(&theme)
            .with_prompt(Message::PromptDefaultFilter.to_string())
            .items(&FilterMode::ALL)
            .default(position(&FilterMode::ALL, &current.default_filter))
            .interact()?];

        let default_sort = SortMode::ALL[Select::with_theme(&theme)
            .with_prompt(Message::PromptDefaultSort.to_string())
            .items(&SortMode::ALL)
            .default(position(&SortMode::ALL, &current.default_sort))
            .interact()?];

        Ok(Config {
            default_priority,
            default_filter,
            default_sort,
        })
    }
}

fn position<T: PartialEq>(items: &[T], value: &T) -> usize {
    items.iter().position(|item| item == value).unwrap_or(0)
}
