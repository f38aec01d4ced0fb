//! Intent dispatch for the task list.
//!
//! The [`Controller`] owns the application state explicitly: the task store,
//! the persistence adapter and the session selection ([`AppState`]). User
//! actions arrive as [`Intent`] values through a single entry point,
//! [`Controller::handle_intent`], which sequences
//!
//! 1. the store mutation,
//! 2. a snapshot save (only when the list actually changed),
//! 3. the [`Effect`]s the presentation layer should carry out.
//!
//! The derived list itself is always available from [`Controller::view`], so
//! a renderer reacts to [`Effect::Render`] by calling it.
//!
//! ## Example
//!
//! ```rust
//! use taskly::db::blob::MemoryBlobStore;
//! use taskly::libs::clock::SystemClock;
//! use taskly::libs::controller::{AppState, Controller, Intent};
//! use taskly::libs::task::Priority;
//!
//! let (mut app, warning) = Controller::open(MemoryBlobStore::new(), SystemClock, AppState::default()).unwrap();
//! assert!(warning.is_none());
//! app.handle_intent(Intent::add("Buy milk", Priority::High)).unwrap();
//! assert_eq!(app.view().counter, "1 task left");
//! ```

use super::clock::Clock;
use super::error::PersistenceResult;
use super::query::{self, ViewModel};
use super::store::TaskStore;
use super::task::{FilterMode, Priority, SortMode, Task, TaskId};
use crate::db::blob::BlobStore;
use crate::db::tasks::Tasks;
use std::fmt::{self, Display, Formatter};
use tracing::{debug, info, warn};

/// Session view state. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub current_filter: FilterMode,
    pub current_sort: SortMode,
    /// Task whose edit session is open, if any.
    pub editing_id: Option<TaskId>,
}

impl AppState {
    pub fn new(current_filter: FilterMode, current_sort: SortMode) -> Self {
        Self {
            current_filter,
            current_sort,
            editing_id: None,
        }
    }
}

/// A user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Add { text: String, priority: Priority },
    Toggle(TaskId),
    Delete(TaskId),
    StartEdit(TaskId),
    /// Applies to the task named by the open edit session.
    CommitEdit { text: String, priority: Priority },
    CancelEdit,
    SetFilter(FilterMode),
    SetSort(SortMode),
    ClearCompleted,
}

impl Intent {
    pub fn add(text: impl Into<String>, priority: Priority) -> Self {
        Intent::Add {
            text: text.into(),
            priority,
        }
    }

    pub fn commit_edit(text: impl Into<String>, priority: Priority) -> Self {
        Intent::CommitEdit {
            text: text.into(),
            priority,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Intent::Add { .. } => "add",
            Intent::Toggle(_) => "toggle",
            Intent::Delete(_) => "delete",
            Intent::StartEdit(_) => "start_edit",
            Intent::CommitEdit { .. } => "commit_edit",
            Intent::CancelEdit => "cancel_edit",
            Intent::SetFilter(_) => "set_filter",
            Intent::SetSort(_) => "set_sort",
            Intent::ClearCompleted => "clear_completed",
        }
    }
}

/// Work requested of the presentation layer after an intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Re-derive and redraw the list.
    Render,
    /// Redraw the "n tasks left" counter.
    UpdateCounter,
    /// Reset the new-task input.
    ClearInput,
    /// Open an edit session pre-populated with the task's current values.
    OpenEditor { id: TaskId, text: String, priority: Priority },
    CloseEditor,
}

/// Conditions found while opening the controller that the user should hear
/// about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupWarning {
    /// Stored data could not be decoded. The raw blob was preserved under
    /// `backup_key` and the session starts with an empty list.
    CorruptData { backup_key: String, reason: String },
}

impl Display for StartupWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            StartupWarning::CorruptData { backup_key, reason } => {
                write!(f, "stored tasks could not be read ({}); original data kept under '{}'", reason, backup_key)
            }
        }
    }
}

pub struct Controller<B: BlobStore, C: Clock> {
    store: TaskStore<C>,
    persistence: Tasks<B>,
    state: AppState,
}

impl<B: BlobStore, C: Clock> Controller<B, C> {
    /// Loads the persisted list and builds the controller.
    ///
    /// Corrupt stored data does not fail startup: the blob is copied to a
    /// backup key, the main key is reset to an empty list, a
    /// [`StartupWarning`] is returned and the list starts empty. Recovery
    /// therefore happens once per corruption, not once per open.
    ///
    /// # Errors
    ///
    /// Fails when the blob store cannot be read at all, or when the backup
    /// copy or the reset cannot be written.
    pub fn open(blobs: B, clock: C, state: AppState) -> PersistenceResult<(Self, Option<StartupWarning>)> {
        let mut persistence = Tasks::new(blobs);
        let (tasks, warning) = match persistence.load() {
            Ok(tasks) => (tasks, None),
            Err(err) if err.is_corrupt() => {
                let raw = persistence.load_raw()?.unwrap_or_default();
                let backup_key = persistence.backup_corrupt(&raw, clock.now().timestamp_millis())?;
                // The raw blob is safe under the backup key; reset the main key so
                // the next open does not back it up again.
                persistence.save(&[])?;
                warn!(error = %err, %backup_key, "stored tasks are corrupt, starting empty");
                let reason = std::error::Error::source(&err).map(|source| source.to_string()).unwrap_or_else(|| err.to_string());
                (Vec::new(), Some(StartupWarning::CorruptData { backup_key, reason }))
            }
            Err(err) => return Err(err),
        };

        let controller = Self {
            store: TaskStore::with_tasks(tasks, clock),
            persistence,
            state,
        };
        Ok((controller, warning))
    }

    /// Applies one intent and returns the effects to carry out.
    ///
    /// An empty effect list means the intent was a no-op: blank text, an
    /// unknown id, or a commit with no open edit session.
    pub fn handle_intent(&mut self, intent: Intent) -> PersistenceResult<Vec<Effect>> {
        debug!(intent = intent.name(), "handling intent");
        let effects = match intent {
            Intent::Add { text, priority } => match self.store.add(&text, priority) {
                Some(task) => {
                    self.save()?;
                    info!(id = %task.id, "task created");
                    vec![Effect::Render, Effect::UpdateCounter, Effect::ClearInput]
                }
                None => Vec::new(),
            },
            Intent::Toggle(id) => {
                if self.store.toggle(&id) {
                    self.save()?;
                    vec![Effect::Render, Effect::UpdateCounter]
                } else {
                    Vec::new()
                }
            }
            Intent::Delete(id) => {
                if self.store.remove(&id) {
                    self.save()?;
                    info!(%id, "task deleted");
                    vec![Effect::Render, Effect::UpdateCounter]
                } else {
                    Vec::new()
                }
            }
            Intent::StartEdit(id) => match self.store.get(&id) {
                Some(task) => {
                    let effect = Effect::OpenEditor {
                        id: task.id.clone(),
                        text: task.text.clone(),
                        priority: task.priority,
                    };
                    self.state.editing_id = Some(id);
                    vec![effect]
                }
                None => Vec::new(),
            },
            Intent::CommitEdit { text, priority } => self.commit_edit(&text, priority)?,
            Intent::CancelEdit => match self.state.editing_id.take() {
                Some(_) => vec![Effect::CloseEditor],
                None => Vec::new(),
            },
            Intent::SetFilter(mode) => {
                self.state.current_filter = mode;
                vec![Effect::Render]
            }
            Intent::SetSort(mode) => {
                self.state.current_sort = mode;
                vec![Effect::Render]
            }
            Intent::ClearCompleted => {
                let removed = self.store.clear_completed();
                if removed > 0 {
                    self.save()?;
                    info!(removed, "completed tasks cleared");
                    vec![Effect::Render, Effect::UpdateCounter]
                } else {
                    Vec::new()
                }
            }
        };
        Ok(effects)
    }

    fn commit_edit(&mut self, text: &str, priority: Priority) -> PersistenceResult<Vec<Effect>> {
        let Some(id) = self.state.editing_id.clone() else {
            return Ok(Vec::new());
        };
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        let updated = self.store.update(&id, text, priority);
        if updated {
            self.save()?;
            info!(%id, "task edited");
        }
        self.state.editing_id = None;
        Ok(vec![Effect::Render, Effect::CloseEditor])
    }

    fn save(&mut self) -> PersistenceResult<()> {
        self.persistence.save(self.store.all())
    }

    /// The derived list for the current filter and sort.
    pub fn view(&self) -> ViewModel {
        query::derive_view(self.store.all(), self.state.current_filter, self.state.current_sort)
    }

    /// Counter text over the full list, e.g. `2 tasks left`.
    pub fn counter(&self) -> String {
        query::counter_label(self.store.active_count())
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.all()
    }

    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.store.get(id)
    }

    pub fn blobs(&self) -> &B {
        self.persistence.blobs()
    }
}
