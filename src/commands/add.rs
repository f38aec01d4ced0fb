use super::{open_app, present};
use crate::{
    libs::{controller::Intent, messages::Message, task::Priority},
    msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task text; multiple words are joined with spaces
    #[arg(required = true)]
    text: Vec<String>,
    /// high, medium or low (defaults to the configured priority)
    #[arg(short, long)]
    priority: Option<Priority>,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let (mut app, config) = open_app()?;
    let text = args.text.join(" ");
    let priority = args.priority.unwrap_or(config.default_priority);

    let effects = app.handle_intent(Intent::add(text.as_str(), priority))?;
    if effects.is_empty() {
        msg_warning!(Message::TaskTextEmpty);
        return Ok(());
    }

    msg_success!(Message::TaskCreated(text.trim().to_string()));
    present(&app, &effects);
    Ok(())
}
