//! Derivation of the displayed task list.
//!
//! The pipeline is pure: it borrows the full list, filters it, sorts the
//! survivors and projects them into a [`ViewModel`] that any rendering target
//! can consume. Nothing here mutates or caches; the view is recomputed on
//! every render.
//!
//! ```text
//! &[Task] ──filter(mode)──▶ Vec<&Task> ──sort(mode)──▶ Vec<&Task> ──project──▶ ViewModel
//! ```

use super::task::{FilterMode, Priority, SortMode, Task, TaskId};
use chrono::{DateTime, Local, Utc};
use serde::Serialize;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Text shown in place of rows when the derived list is empty.
pub const EMPTY_PLACEHOLDER: &str = "No tasks to display";

/// Keeps the tasks that belong to `mode`, in their original order.
pub fn filter(tasks: &[Task], mode: FilterMode) -> Vec<&Task> {
    tasks.iter().filter(|task| mode.matches(task)).collect()
}

/// Returns a newly ordered copy of `tasks`.
///
/// The sort is stable: tasks with equal keys keep their relative order.
pub fn sort<'a>(tasks: &[&'a Task], mode: SortMode) -> Vec<&'a Task> {
    let mut sorted = tasks.to_vec();
    match mode {
        SortMode::DateAdded => sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortMode::Alphabetical => sorted.sort_by(|a, b| compare_text(&a.text, &b.text)),
        SortMode::Priority => sorted.sort_by_key(|task| task.priority.rank()),
    }
    sorted
}

/// Filter then sort.
pub fn apply(tasks: &[Task], filter_mode: FilterMode, sort_mode: SortMode) -> Vec<&Task> {
    sort(&filter(tasks, filter_mode), sort_mode)
}

/// Collation used for alphabetical order.
///
/// Three levels, each consulted only when the previous one ties:
///
/// 1. base letters, ignoring accents and case (`é` sorts with `e`)
/// 2. accents: an unaccented letter sorts before its accented forms
/// 3. case: lowercase sorts before uppercase at the first differing position
pub fn compare_text(a: &str, b: &str) -> Ordering {
    let (a_nfd, b_nfd): (Vec<char>, Vec<char>) = (a.nfd().collect(), b.nfd().collect());

    let primary = base_key(&a_nfd).cmp(&base_key(&b_nfd));
    if primary != Ordering::Equal {
        return primary;
    }
    let secondary = lower_key(&a_nfd).cmp(&lower_key(&b_nfd));
    if secondary != Ordering::Equal {
        return secondary;
    }
    for (ca, cb) in a_nfd.iter().zip(b_nfd.iter()) {
        if ca == cb {
            continue;
        }
        match (ca.is_lowercase(), cb.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => return ca.cmp(cb),
        }
    }
    a_nfd.len().cmp(&b_nfd.len())
}

fn base_key(decomposed: &[char]) -> String {
    decomposed.iter().filter(|c| !is_combining_mark(**c)).flat_map(|c| c.to_lowercase()).collect()
}

fn lower_key(decomposed: &[char]) -> String {
    decomposed.iter().flat_map(|c| c.to_lowercase()).collect()
}

/// Counter line for `active` incomplete tasks, e.g. `1 task left`.
pub fn counter_label(active: usize) -> String {
    format!("{} task{} left", active, if active == 1 { "" } else { "s" })
}

/// Short creation date, e.g. `Oct 15`, in local time.
pub fn format_date(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%b %-d").to_string()
}

/// One displayed task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRow {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    pub priority: Priority,
    pub date_label: String,
}

impl From<&Task> for TaskRow {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            text: task.text.clone(),
            completed: task.completed,
            priority: task.priority,
            date_label: format_date(task.created_at),
        }
    }
}

/// Everything a renderer needs to draw the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewModel {
    pub rows: Vec<TaskRow>,
    pub counter: String,
    pub filter: FilterMode,
    pub sort: SortMode,
}

impl ViewModel {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.text.as_str()).collect()
    }
}

/// Builds the view for the current selection.
///
/// The counter always reflects the full list, not the filtered subset.
pub fn derive_view(tasks: &[Task], filter_mode: FilterMode, sort_mode: SortMode) -> ViewModel {
    let active = tasks.iter().filter(|task| !task.completed).count();
    ViewModel {
        rows: apply(tasks, filter_mode, sort_mode).into_iter().map(TaskRow::from).collect(),
        counter: counter_label(active),
        filter: filter_mode,
        sort: sort_mode,
    }
}
