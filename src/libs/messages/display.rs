//! Text for every [`Message`] variant.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(text) => format!("Task '{}' added.", text),
            Message::TaskTextEmpty => "Task text is empty, nothing changed.".to_string(),
            Message::TaskCompleted(text) => format!("Task '{}' marked as completed.", text),
            Message::TaskReopened(text) => format!("Task '{}' marked as active.", text),
            Message::TaskDeleted(text) => format!("Task '{}' deleted.", text),
            Message::TaskNotFound(id) => format!("Task with ID {} not found.", id),
            Message::TaskUpdated(text) => format!("Task '{}' updated.", text),
            Message::EditingTask(text) => format!("Editing task: {}", text),
            Message::CompletedCleared(count) => format!("Cleared {} completed task(s).", count),
            Message::NothingToClear => "No completed tasks to clear.".to_string(),

            // === PROMPTS ===
            Message::PromptTaskText => "Task".to_string(),
            Message::PromptPriority => "Priority".to_string(),
            Message::PromptDefaultPriority => "Default priority for new tasks".to_string(),
            Message::PromptDefaultFilter => "Default filter".to_string(),
            Message::PromptDefaultSort => "Default sort order".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved.".to_string(),
            Message::ConfigCurrent(path) => format!("Configuration file: {}", path),

            // === STORAGE MESSAGES ===
            Message::StoredDataRecovered(details) => format!("Starting with an empty list: {}", details),
        };
        write!(f, "{}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_messages_include_details() {
        assert_eq!(Message::TaskCreated("Buy milk".into()).to_string(), "Task 'Buy milk' added.");
        assert_eq!(Message::TaskNotFound("17".into()).to_string(), "Task with ID 17 not found.");
        assert_eq!(Message::CompletedCleared(2).to_string(), "Cleared 2 completed task(s).");
    }

    #[test]
    fn test_edit_prompts() {
        assert_eq!(Message::PromptTaskText.to_string(), "Task");
        assert_eq!(Message::PromptPriority.to_string(), "Priority");
    }
}
