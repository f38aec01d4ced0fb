use super::{open_app, present};
use crate::{
    libs::{controller::Intent, messages::Message, task::TaskId},
    msg_error, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task ID
    id: String,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let (mut app, _) = open_app()?;
    let id = TaskId::from(args.id);
    let text = app.task(&id).map(|task| task.text.clone());

    let effects = app.handle_intent(Intent::Delete(id.clone()))?;
    match text {
        Some(text) if !effects.is_empty() => {
            msg_success!(Message::TaskDeleted(text));
            present(&app, &effects);
        }
        _ => msg_error!(Message::TaskNotFound(id.to_string())),
    }
    Ok(())
}
