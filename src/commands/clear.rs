use super::{open_app, present};
use crate::{
    libs::{controller::Intent, messages::Message},
    msg_info, msg_success,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let (mut app, _) = open_app()?;
    let before = app.tasks().len();

    let effects = app.handle_intent(Intent::ClearCompleted)?;
    if effects.is_empty() {
        msg_info!(Message::NothingToClear);
        return Ok(());
    }

    msg_success!(Message::CompletedCleared(before - app.tasks().len()));
    present(&app, &effects);
    Ok(())
}
