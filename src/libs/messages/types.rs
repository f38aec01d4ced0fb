/// Every user-facing line the CLI prints.
///
/// Text lives in the `Display` implementation in `display.rs`; call sites
/// only pick a variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskTextEmpty,
    TaskCompleted(String),
    TaskReopened(String),
    TaskDeleted(String),
    TaskNotFound(String),
    TaskUpdated(String),
    EditingTask(String),
    CompletedCleared(usize),
    NothingToClear,

    // === PROMPTS ===
    PromptTaskText,
    PromptPriority,
    PromptDefaultPriority,
    PromptDefaultFilter,
    PromptDefaultSort,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigCurrent(String),

    // === STORAGE MESSAGES ===
    StoredDataRecovered(String),
}
