use super::{open_app, present};
use crate::{
    libs::{
        controller::{Effect, Intent},
        messages::Message,
        task::{Priority, TaskId},
    },
    msg_error, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task ID
    id: String,
    /// New text; prompted with the current text when omitted
    #[arg(short, long)]
    text: Option<String>,
    /// New priority; prompted along with the text when both are omitted,
    /// otherwise the current one is kept
    #[arg(short, long)]
    priority: Option<Priority>,
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let (mut app, _) = open_app()?;
    let id = TaskId::from(args.id);

    let opened = app.handle_intent(Intent::StartEdit(id.clone()))?;
    let Some((current_text, current_priority)) = opened.into_iter().find_map(|effect| match effect {
        Effect::OpenEditor { text, priority, .. } => Some((text, priority)),
        _ => None,
    }) else {
        msg_error!(Message::TaskNotFound(id.to_string()));
        return Ok(());
    };

    let (text, priority) = match args.text {
        Some(text) => (text, args.priority.unwrap_or(current_priority)),
        None => {
            let theme = ColorfulTheme::default();
            msg_print!(Message::EditingTask(current_text.clone()), true);
            let text: String = Input::with_theme(&theme)
                .with_prompt(Message::PromptTaskText.to_string())
                .with_initial_text(current_text)
                .allow_empty(true)
                .interact_text()?;
            let priority = match args.priority {
                Some(priority) => priority,
                None => {
                    let current = Priority::ALL.iter().position(|p| *p == current_priority).unwrap_or(0);
                    Priority::ALL[Select::with_theme(&theme)
                        .with_prompt(Message::PromptPriority.to_string())
                        .items(&Priority::ALL)
                        .default(current)
                        .interact()?]
                }
            };
            (text, priority)
        }
    };

    let effects = app.handle_intent(Intent::commit_edit(text.as_str(), priority))?;
    if effects.is_empty() {
        app.handle_intent(Intent::CancelEdit)?;
        msg_warning!(Message::TaskTextEmpty);
        return Ok(());
    }

    msg_success!(Message::TaskUpdated(text.trim().to_string()));
    present(&app, &effects);
    Ok(())
}
