//! Task data model.
//!
//! A [`Task`] is the only entity the application manages. Alongside it live
//! the small enumerations that drive the rest of the system:
//!
//! - [`Priority`]: `high`, `medium` or `low`
//! - [`FilterMode`]: which subset of tasks is displayed
//! - [`SortMode`]: how the displayed subset is ordered
//!
//! Every enum parses from and prints as its wire spelling, so the same strings
//! are used on the command line, in the configuration file and in the
//! persisted task list.

use super::error::ParseModeError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Opaque task identifier.
///
/// Assigned once at creation and never changed. Lookups go through the id
/// only, so two tasks with identical text remain distinguishable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TaskId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Task urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Sort rank: high sorts first.
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(ParseModeError::new("priority", s)),
        }
    }
}

/// Which tasks the view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    All,
    Active,
    Completed,
}

impl FilterMode {
    pub const ALL: [FilterMode; 3] = [FilterMode::All, FilterMode::Active, FilterMode::Completed];

    /// Returns `true` when `task` belongs to this subset.
    pub fn matches(self, task: &Task) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Active => !task.completed,
            FilterMode::Completed => task.completed,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Active => "active",
            FilterMode::Completed => "completed",
        }
    }
}

impl Display for FilterMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(FilterMode::All),
            "active" => Ok(FilterMode::Active),
            "completed" => Ok(FilterMode::Completed),
            _ => Err(ParseModeError::new("filter", s)),
        }
    }
}

/// Ordering applied to the displayed tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Most recently created first.
    #[default]
    DateAdded,
    Alphabetical,
    Priority,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [SortMode::DateAdded, SortMode::Alphabetical, SortMode::Priority];

    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::DateAdded => "date-added",
            SortMode::Alphabetical => "alphabetical",
            SortMode::Priority => "priority",
        }
    }
}

impl Display for SortMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "date-added" | "date" => Ok(SortMode::DateAdded),
            "alphabetical" | "alpha" => Ok(SortMode::Alphabetical),
            "priority" => Ok(SortMode::Priority),
            _ => Err(ParseModeError::new("sort", s)),
        }
    }
}

/// A single task record.
///
/// Serialized with the field names the persisted blob uses: `id`, `text`,
/// `completed`, `priority` and `date` (RFC 3339). `createdAt` is accepted as an
/// alias for `date` when loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub priority: Priority,
    #[serde(rename = "date", alias = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Builds a new, incomplete task.
    ///
    /// Returns `None` when `text` is empty after trimming. The stored text is
    /// the trimmed input.
    pub fn new(id: TaskId, text: &str, priority: Priority, created_at: DateTime<Utc>) -> Option<Self> {
        let text = normalize_text(text)?;
        Some(Task {
            id,
            text,
            completed: false,
            priority,
            created_at,
        })
    }
}

/// Trims `text`, returning `None` when nothing is left.
pub fn normalize_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
