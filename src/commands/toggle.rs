use super::{open_app, present};
use crate::{
    libs::{controller::Intent, messages::Message, task::TaskId},
    msg_error, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ToggleArgs {
    /// Task ID
    id: String,
}

pub fn cmd(args: ToggleArgs) -> Result<()> {
    let (mut app, _) = open_app()?;
    let id = TaskId::from(args.id);

    let effects = app.handle_intent(Intent::Toggle(id.clone()))?;
    let Some(task) = app.task(&id).filter(|_| !effects.is_empty()) else {
        msg_error!(Message::TaskNotFound(id.to_string()));
        return Ok(());
    };

    if task.completed {
        msg_success!(Message::TaskCompleted(task.text.clone()));
    } else {
        msg_success!(Message::TaskReopened(task.text.clone()));
    }
    present(&app, &effects);
    Ok(())
}
