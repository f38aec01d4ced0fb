//! Authoritative in-memory task list.
//!
//! [`TaskStore`] is the only place task records are created, mutated or
//! destroyed. Every mutating operation reports whether the list actually
//! changed so the caller knows when a save is due:
//!
//! - blank text on `add`/`update` discards the operation
//! - an unknown id turns `toggle`/`update`/`remove` into a no-op
//!
//! Neither case is an error.

use super::clock::Clock;
use super::task::{normalize_text, Priority, Task, TaskId};
use std::collections::HashSet;
use tracing::{debug, warn};

pub struct TaskStore<C: Clock> {
    tasks: Vec<Task>,
    clock: C,
}

impl<C: Clock> TaskStore<C> {
    pub fn new(clock: C) -> Self {
        Self { tasks: Vec::new(), clock }
    }

    /// Seeds the store with previously persisted tasks.
    ///
    /// Records whose id repeats an earlier record are dropped so ids stay
    /// unique.
    pub fn with_tasks(tasks: Vec<Task>, clock: C) -> Self {
        let mut seen = HashSet::new();
        let mut unique = Vec::with_capacity(tasks.len());
        for task in tasks {
            if seen.insert(task.id.clone()) {
                unique.push(task);
            } else {
                warn!(id = %task.id, "dropping task with duplicate id");
            }
        }
        Self { tasks: unique, clock }
    }

    /// Creates and appends a task.
    ///
    /// Returns `None` without touching the list when `text` is blank.
    pub fn add(&mut self, text: &str, priority: Priority) -> Option<Task> {
        let text = normalize_text(text)?;
        let created_at = self.clock.now();
        let id = self.next_id(created_at.timestamp_millis());
        let task = Task::new(id, &text, priority, created_at)?;
        debug!(id = %task.id, %priority, "task added");
        self.tasks.push(task.clone());
        Some(task)
    }

    /// Flips completion for `id`. Returns `false` when no task matches.
    pub fn toggle(&mut self, id: &TaskId) -> bool {
        match self.find_mut(id) {
            Some(task) => {
                task.completed = !task.completed;
                debug!(%id, completed = task.completed, "task toggled");
                true
            }
            None => false,
        }
    }

    /// Replaces text and priority for `id`.
    ///
    /// Returns `false` when `text` is blank or no task matches.
    pub fn update(&mut self, id: &TaskId, text: &str, priority: Priority) -> bool {
        let Some(text) = normalize_text(text) else {
            return false;
        };
        match self.find_mut(id) {
            Some(task) => {
                task.text = text;
                task.priority = priority;
                debug!(%id, %priority, "task updated");
                true
            }
            None => false,
        }
    }

    /// Removes `id`. Returns `false` when no task matches.
    pub fn remove(&mut self, id: &TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| &task.id != id);
        let removed = self.tasks.len() != before;
        if removed {
            debug!(%id, "task removed");
        }
        removed
    }

    /// Removes every completed task and returns how many were dropped.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.completed);
        let removed = before - self.tasks.len();
        debug!(removed, "completed tasks cleared");
        removed
    }

    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| &task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of tasks not yet completed.
    pub fn active_count(&self) -> usize {
        self.tasks.iter().filter(|task| !task.completed).count()
    }

    fn find_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| &task.id == id)
    }

    // Ids are creation milliseconds; collisions move to the next free value.
    fn next_id(&self, millis: i64) -> TaskId {
        let mut candidate = millis;
        loop {
            let id = TaskId::new(candidate.to_string());
            if self.get(&id).is_none() {
                return id;
            }
            candidate += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::clock::ManualClock;
    use chrono::{Duration, TimeZone, Utc};

    fn frozen_store() -> TaskStore<ManualClock> {
        let start = Utc.with_ymd_and_hms(2024, 5, 2, 8, 0, 0).unwrap();
        TaskStore::new(ManualClock::with_step(start, Duration::zero()))
    }

    #[test]
    fn test_ids_stay_unique_within_same_millisecond() {
        let mut store = frozen_store();
        let first = store.add("one", Priority::Low).unwrap();
        let second = store.add("two", Priority::Low).unwrap();
        assert_ne!(first.id, second.id);
        let first_ms: i64 = first.id.as_str().parse().unwrap();
        let second_ms: i64 = second.id.as_str().parse().unwrap();
        assert_eq!(second_ms, first_ms + 1);
    }

    #[test]
    fn test_duplicate_ids_dropped_on_seed() {
        let mut store = frozen_store();
        let task = store.add("one", Priority::Low).unwrap();
        let seeded = TaskStore::with_tasks(vec![task.clone(), task], FixedClock);
        assert_eq!(seeded.len(), 1);
    }

    struct FixedClock;

    impl Clock for FixedClock {
        fn now(&self) -> chrono::DateTime<Utc> {
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
        }
    }
}
